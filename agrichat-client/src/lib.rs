#![deny(missing_docs)]
//! Streaming chat client for the agrichat farm-assistant endpoint.
//!
//! The assistant backend answers over a chunked HTTP response framed as
//! Server-Sent Events. This crate opens the authenticated request
//! ([`Chatbot`]), reassembles event lines that arrive split across network
//! chunks ([`FrameDecoder`]), and grows the assistant's answer one fragment
//! at a time ([`AnswerAccumulator`]), notifying an observer with the
//! cumulative text after each contributing frame.
//!
//! # Example
//!
//! ```no_run
//! use agrichat_client::{CancellationToken, Chatbot};
//! use agrichat_types::AuthToken;
//!
//! # async fn run() -> Result<(), agrichat_types::ChatError> {
//! let bot = Chatbot::new("https://example.supabase.co");
//! let token = AuthToken::permanent("jwt");
//!
//! let _outcome = bot
//!     .ask(
//!         "When should I sow winter wheat?",
//!         &token,
//!         CancellationToken::new(),
//!         |partial| println!("{partial}"),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod answer;
pub mod client;
pub(crate) mod error;
pub(crate) mod session;
pub mod sse;

pub use answer::AnswerAccumulator;
pub use client::Chatbot;
pub use sse::{Frame, FrameDecoder};

// Re-exports for convenience
pub use agrichat_types::{AuthToken, ChatError, ChatOutcome};
pub use tokio_util::sync::CancellationToken;
