//! Swipe interpretation.
//!
//! A completed gesture reports one of four directions. Up and down are
//! ignored. Left discards the offered card, right moves it into the chosen
//! history. Cards never travel back into the deck.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::{ChosenHistory, Deck};
use crate::error::CoreError;

/// Direction of a completed swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Swipe up (ignored).
    Up,
    /// Swipe down (ignored).
    Down,
    /// Swipe left: discard the card.
    Left,
    /// Swipe right: choose the card.
    Right,
}

impl Direction {
    /// Parse a direction from user input. Accepts full names and
    /// single-letter aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" => Some(Self::Up),
            "down" | "d" => Some(Self::Down),
            "left" | "l" => Some(Self::Left),
            "right" | "r" => Some(Self::Right),
            _ => None,
        }
    }

    /// All directions.
    pub fn all() -> &'static [Self] {
        &[Self::Up, Self::Down, Self::Left, Self::Right]
    }

    /// Whether a swipe in this direction consumes the offered card.
    pub fn consumes(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl std::str::FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownDirection(s.trim().to_string()))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// What a swipe did to the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Up or down: nothing changed.
    Ignored,
    /// Left: the card was removed and dropped.
    Discarded(Card),
    /// Right: the card was moved into the chosen history.
    Chosen(Card),
    /// Left or right on an empty deck: nothing changed.
    Empty,
}

impl SwipeOutcome {
    /// The card the swipe moved, if any.
    pub fn card(&self) -> Option<Card> {
        match self {
            Self::Discarded(c) | Self::Chosen(c) => Some(*c),
            Self::Ignored | Self::Empty => None,
        }
    }
}

/// Apply one swipe to the deck and history.
///
/// Touches nothing besides the two collections.
pub fn apply_swipe(
    direction: Direction,
    deck: &mut Deck,
    history: &mut ChosenHistory,
) -> SwipeOutcome {
    if !direction.consumes() {
        return SwipeOutcome::Ignored;
    }

    let Some(card) = deck.pop_front() else {
        return SwipeOutcome::Empty;
    };

    if direction == Direction::Right {
        history.push(card);
        SwipeOutcome::Chosen(card)
    } else {
        SwipeOutcome::Discarded(card)
    }
}
