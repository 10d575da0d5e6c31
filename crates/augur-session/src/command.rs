//! Text commands understood by a reading.
//!
//! Each line of input stands for one gesture or button press.

use augur_core::Direction;

use crate::error::{SessionError, SessionResult};

/// One user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A completed swipe.
    Swipe(Direction),
    /// A swipe released before the commit threshold.
    SnapBack,
    /// Ask for a prophecy from the chosen cards.
    Send,
    /// Show the deck, the chosen cards and the prophecy.
    Status,
    /// Show the reading journal.
    Journal,
    /// Show the command list.
    Help,
    /// End the reading.
    Quit,
}

impl Command {
    /// Parse a line of input. Blank input yields `None`.
    pub fn parse(input: &str) -> SessionResult<Option<Self>> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        if let Some(direction) = Direction::parse(trimmed) {
            return Ok(Some(Self::Swipe(direction)));
        }

        let cmd = match trimmed.to_lowercase().as_str() {
            "snap" | "snap back" => Self::SnapBack,
            "send" | "prophecy" | "read" => Self::Send,
            "status" | "s" => Self::Status,
            "journal" | "j" => Self::Journal,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return Err(SessionError::UnknownCommand(trimmed.to_string())),
        };
        Ok(Some(cmd))
    }
}

/// Command overview shown by `help`.
pub const HELP: &str = "\
Reading Commands:
  right | r      Choose the offered card
  left | l       Discard the offered card
  up | down      Ignored swipes
  snap           Release a swipe without committing
  send           Ask for a prophecy from the chosen cards
  status         Show deck, chosen cards and prophecy
  journal        Show the reading journal
  help           Show this help
  quit           End the reading";
