//! Wordle Game
//!
//! A terminal word-guessing game: a hidden secret is generated once per
//! session and the player has a fixed budget of same-length guesses.
//! Feedback uses the canonical two-pass scoring, so duplicate letters are
//! classified correctly.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GameConfig, GameSession, SessionState};
//!
//! let mut session = GameSession::new("apple", GameConfig::default()).unwrap();
//! let (feedback, state) = session.submit_guess("apple").unwrap();
//!
//! assert!(feedback.is_win());
//! assert_eq!(state, SessionState::Won { attempts_used: 1 });
//! ```

// Core domain types
pub mod core;

// Secret generation
pub mod secret;

// Word lists
pub mod words;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
