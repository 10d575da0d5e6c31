//! Prophecy session controller for Augur.
//!
//! `ProphecySession` owns the deck, the chosen history and the prophecy
//! state, and exposes every mutation as a named transition: the initial
//! draw, swipes, and the request/collect cycle of a prophecy.

pub mod command;
pub mod config;
pub mod error;
pub mod journal;
pub mod session;

pub use command::Command;
pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use session::{ProphecySession, ProphecyUpdate, SessionState};
