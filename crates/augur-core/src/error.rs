//! Error types for the core deck and prompt operations.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core deck and prompt operations.
///
/// An empty deck is not an error: popping from it yields `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A prompt was requested without any chosen cards.
    #[error("no cards have been chosen")]
    NoCardsChosen,

    /// Text that does not name a swipe direction.
    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    /// Text that does not name a card in the catalog.
    #[error("unknown card: {0}")]
    UnknownCard(String),
}
