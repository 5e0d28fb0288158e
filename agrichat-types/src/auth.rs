//! Bearer credential for the assistant endpoint.

use std::time::SystemTime;

/// An opaque bearer token with optional expiry.
///
/// The client refuses an expired token before any network I/O. Refreshing
/// belongs to whatever issued the token (the auth service session), not to
/// the streaming client.
#[derive(Debug, Clone)]
pub struct AuthToken {
    token: String,
    expires_at: Option<SystemTime>,
}

impl AuthToken {
    /// Create a token with a known expiry.
    #[must_use]
    pub fn new(token: impl Into<String>, expires_at: Option<SystemTime>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Create a token that never expires (for dev/test).
    #[must_use]
    pub fn permanent(token: impl Into<String>) -> Self {
        Self::new(token, None)
    }

    /// The raw bearer value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> &str {
        &self.token
    }

    /// Check if this token has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .map(|exp| SystemTime::now() > exp)
            .unwrap_or(false)
    }

    /// Returns when this token expires, if known.
    #[must_use]
    pub fn expires_at(&self) -> Option<SystemTime> {
        self.expires_at
    }
}
