//! Journal storage and export.

use augur_core::Direction;
use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of reading events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Reading Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Drawn { cards, .. } => {
                    out.push_str(&format!("**Drawn**: {}\n\n", cards.join(", ")));
                }
                JournalEntry::Swiped {
                    direction, card, ..
                } => {
                    out.push_str(&format!("- {}: {card}\n\n", swipe_verb(*direction)));
                }
                JournalEntry::ProphecyRequested { cards, .. } => {
                    out.push_str(&format!("## Prophecy for {}\n\n", cards.join(", ")));
                }
                JournalEntry::ProphecyReceived { paragraphs, .. } => {
                    for p in paragraphs {
                        out.push_str(&format!("> {p}\n>\n"));
                    }
                    out.push('\n');
                }
                JournalEntry::ProphecyFailed { reason, .. } => {
                    out.push_str(&format!("*The prophecy failed*: {reason}\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Reading Journal\n===============\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Drawn { cards, .. } => {
                    out.push_str(&format!("Drawn: {}\n\n", cards.join(", ")));
                }
                JournalEntry::Swiped {
                    direction, card, ..
                } => {
                    out.push_str(&format!("{}: {card}\n\n", swipe_verb(*direction)));
                }
                JournalEntry::ProphecyRequested { cards, .. } => {
                    out.push_str(&format!("--- Prophecy for {} ---\n", cards.join(", ")));
                }
                JournalEntry::ProphecyReceived { paragraphs, .. } => {
                    out.push_str(&paragraphs.join("\n\n"));
                    out.push_str("\n\n");
                }
                JournalEntry::ProphecyFailed { reason, .. } => {
                    out.push_str(&format!("Prophecy failed: {reason}\n\n"));
                }
            }
        }
        out
    }
}

fn swipe_verb(direction: Direction) -> &'static str {
    match direction {
        Direction::Right => "Chosen",
        Direction::Left => "Discarded",
        Direction::Up | Direction::Down => "Ignored",
    }
}
