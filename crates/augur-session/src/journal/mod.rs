//! Journaling system for recording what happened during a reading.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
