//! Completion service access for Augur.
//!
//! Wraps an OpenAI-compatible chat-completion endpoint behind the
//! [`CompletionClient`] trait and runs requests through a single-slot
//! [`ProphecyRequester`]: at most one request is in flight, and a second
//! one is rejected until the first has been collected.

pub mod client;
pub mod config;
pub mod error;
pub mod requester;
pub mod wire;

pub use client::{CompletionClient, HttpCompletionClient};
pub use config::OracleConfig;
pub use error::{OracleError, OracleResult};
pub use requester::ProphecyRequester;
pub use wire::{ChatMessage, CompletionRequest, CompletionResponse, NO_ANSWER, Role};
