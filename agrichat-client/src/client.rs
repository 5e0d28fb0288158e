//! Chatbot API client struct and builder.

use agrichat_types::{AuthToken, ChatError, ChatOutcome, ChatRequest};
use tokio_util::sync::CancellationToken;

use crate::error::{map_http_status, map_reqwest_error};
use crate::session;

/// Path of the chat function, relative to the base URL.
const CHAT_PATH: &str = "/functions/v1/chatbot";

/// Client for the farm-assistant chat endpoint.
///
/// One `Chatbot` may serve many sessions; each [`Chatbot::ask`] call owns
/// its own decoder and answer state, so concurrent sessions never share
/// anything beyond the HTTP connection pool.
///
/// # Example
///
/// ```no_run
/// use agrichat_client::Chatbot;
///
/// let bot = Chatbot::new("https://example.supabase.co");
/// ```
pub struct Chatbot {
    /// Backend base URL (override for testing or self-hosted deployments).
    pub(crate) base_url: String,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl Chatbot {
    /// Create a new client for the backend at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the HTTP client (custom timeouts, proxies, TLS settings).
    ///
    /// The client itself imposes no timeout; callers that want a deadline
    /// configure one here or cancel the session externally.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Build the chat endpoint URL.
    pub(crate) fn chat_url(&self) -> String {
        format!("{}{CHAT_PATH}", self.base_url)
    }

    /// Send a message and stream the assistant's reply.
    ///
    /// `on_update` is called after every frame that contributes text, with
    /// the cumulative answer so far (not just the fragment), in strict frame
    /// order. Cancelling `cancel` ends the session at the next await point:
    /// no further updates are delivered and the connection is dropped.
    ///
    /// Malformed data frames are skipped without ending the session; only
    /// transport-level failures surface as errors.
    pub async fn ask(
        &self,
        message: &str,
        token: &AuthToken,
        cancel: CancellationToken,
        on_update: impl FnMut(&str),
    ) -> Result<ChatOutcome, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!("chat session cancelled before the request completed");
                return Ok(ChatOutcome::Cancelled);
            }
            opened = self.open_stream(message, token) => opened?,
        };

        session::run(response, cancel, on_update).await
    }

    /// Open the streaming request.
    ///
    /// All pre-stream failures surface here, before any frame is produced:
    /// expired credential, non-2xx status (with the server's JSON error
    /// message when it provides one), and a declared-empty body.
    pub(crate) async fn open_stream(
        &self,
        message: &str,
        token: &AuthToken,
    ) -> Result<reqwest::Response, ChatError> {
        if token.is_expired() {
            return Err(ChatError::Unauthenticated("token expired".into()));
        }

        let url = self.chat_url();
        tracing::debug!(url = %url, "sending chat request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token.bearer())
            .header("content-type", "application/json")
            .json(&ChatRequest::new(message))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(map_reqwest_error)?;
            return Err(map_http_status(status, &body));
        }

        if response.content_length() == Some(0) {
            return Err(ChatError::NoStream);
        }

        Ok(response)
    }
}
