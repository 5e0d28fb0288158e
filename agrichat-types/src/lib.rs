#![deny(missing_docs)]
//! Shared types for the agrichat assistant client.
//!
//! This crate carries the vocabulary used across the agrichat crates: the
//! [`ChatError`] taxonomy, the [`AuthToken`] credential, the chat request
//! wire body, and the [`ChatOutcome`] terminal state of a session. It has
//! no HTTP or async dependencies so it can be used from any context.

pub mod auth;
pub mod error;
pub mod request;

pub use auth::AuthToken;
pub use error::ChatError;
pub use request::{ChatOutcome, ChatRequest};
