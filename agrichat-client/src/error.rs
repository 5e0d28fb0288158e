//! Internal helpers for mapping HTTP/reqwest errors to [`ChatError`].

use agrichat_types::ChatError;

/// Map a non-success HTTP status (and its body) to a [`ChatError`].
///
/// The backend reports failures as a JSON body of the form
/// `{"error": "..."}`. When that shape is present the message is surfaced
/// verbatim; otherwise a plain status fallback is used.
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> ChatError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"].as_str().map(str::to_string))
        .unwrap_or_else(|| format!("server error: {}", status.as_u16()));

    match status.as_u16() {
        401 | 403 => ChatError::Unauthenticated(message),
        _ => ChatError::Rejected {
            status: status.as_u16(),
            message,
        },
    }
}

/// Map a [`reqwest::Error`] to a [`ChatError`].
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ChatError {
    ChatError::Transport(Box::new(err))
}
