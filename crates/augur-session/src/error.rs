//! Error types for the prophecy session.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur during a prophecy session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The initial draw already happened.
    #[error("the cards have already been drawn")]
    AlreadyDrawn,

    /// A prophecy was requested before any card was chosen.
    #[error("choose at least one card first")]
    NoCardsChosen,

    /// There is no prophecy request to collect.
    #[error("no prophecy is pending")]
    NoPendingProphecy,

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Core deck or prompt error.
    #[error("{0}")]
    Core(#[from] augur_core::CoreError),

    /// Completion request error.
    #[error("{0}")]
    Oracle(#[from] augur_oracle::OracleError),
}
