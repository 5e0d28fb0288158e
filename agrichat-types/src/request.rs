//! Wire types for the chat endpoint and session outcomes.

use serde::Serialize;

/// JSON body of a chat request: `{"message": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// The user's message text.
    pub message: String,
}

impl ChatRequest {
    /// Create a request carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// How a chat session ended.
///
/// Cancellation is a normal terminal state rather than an error: the caller
/// asked for it, and the caller decides what to do with any partial output
/// it already observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The stream finished (sentinel or natural end) with the final answer.
    Complete(String),
    /// The session was cancelled before the stream finished.
    Cancelled,
}

impl ChatOutcome {
    /// The final answer, when the session completed.
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Complete(answer) => Some(answer),
            Self::Cancelled => None,
        }
    }
}
