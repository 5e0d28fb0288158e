//! Error types for chat sessions.

/// Errors from one chat session.
///
/// Malformed data frames are deliberately absent from this taxonomy: the
/// stream consumer skips them and keeps going. Only conditions that end
/// the session surface here.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The credential is expired or was refused by the backend.
    #[error("not authenticated: {0}")]
    Unauthenticated(String),

    /// The backend rejected the request before streaming began.
    #[error("request rejected (HTTP {status}): {message}")]
    Rejected {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Server-provided error message, or a status fallback.
        message: String,
    },

    /// The response carried no body to stream.
    #[error("no response body received")]
    NoStream,

    /// The message to send was empty or whitespace-only.
    #[error("message must not be empty")]
    EmptyMessage,

    /// Network-level failure, before or during streaming.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ChatError {
    /// Whether this error is likely transient and the request can be retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
