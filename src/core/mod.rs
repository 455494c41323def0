//! Core domain types for the game
//!
//! This module contains the scorer and the session state machine with no
//! I/O of any kind. Everything here is pure and directly testable; the CLI
//! and TUI front-ends only drive it and render what it returns.

mod config;
mod error;
mod feedback;
mod session;

pub use config::GameConfig;
pub use error::GameError;
pub use feedback::{Feedback, Mark};
pub use session::{GameSession, SessionState};
