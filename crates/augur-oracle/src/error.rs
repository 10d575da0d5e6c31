//! Error types for completion requests.

use thiserror::Error;

/// Result type for completion operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur while asking the completion service.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The HTTP exchange itself failed.
    #[error("completion transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("completion service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// The response body was not a completion payload.
    #[error("malformed completion response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A request is already occupying the slot.
    #[error("a prophecy request is already in flight")]
    RequestPending,

    /// The spawned request task panicked or was cancelled.
    #[error("completion task failed: {0}")]
    Task(String),
}
