//! Journal entry types.

use augur_core::Direction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the reading journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// The initial cards were laid out.
    Drawn {
        /// Card names, front of the deck first.
        cards: Vec<String>,
        /// When the cards were drawn.
        timestamp: DateTime<Utc>,
    },
    /// A swipe moved a card out of the deck.
    Swiped {
        /// Swipe direction (left or right).
        direction: Direction,
        /// The card that left the deck.
        card: String,
        /// When the swipe happened.
        timestamp: DateTime<Utc>,
    },
    /// A prophecy was requested for the chosen cards.
    ProphecyRequested {
        /// Chosen card names in selection order.
        cards: Vec<String>,
        /// When the request started.
        timestamp: DateTime<Utc>,
    },
    /// The completion service answered.
    ProphecyReceived {
        /// The answer split into paragraphs.
        paragraphs: Vec<String>,
        /// When the answer arrived.
        timestamp: DateTime<Utc>,
    },
    /// The request failed.
    ProphecyFailed {
        /// Error description.
        reason: String,
        /// When the failure was observed.
        timestamp: DateTime<Utc>,
    },
}
