//! Core types for the Augur tarot reader.
//!
//! Provides the fixed major-arcana catalog, the deck queue and chosen
//! history, the swipe reducer that moves cards between them, the prompt
//! template sent to the completion service, and the paragraph splitter
//! applied to its answer.

pub mod card;
pub mod deck;
pub mod error;
pub mod lines;
pub mod prompt;
pub mod swipe;

pub use card::{CATALOG, Card};
pub use deck::{ChosenHistory, Deck};
pub use error::{CoreError, CoreResult};
pub use lines::render_lines;
pub use prompt::build_prompt;
pub use swipe::{Direction, SwipeOutcome, apply_swipe};
