//! Error types for the game core

use std::fmt;

/// Errors produced by the scorer and the session state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A guess (or secret) whose length differs from the configured word
    /// length. Recoverable: the attempt is not consumed and the caller may
    /// submit again.
    InvalidLength { expected: usize, found: usize },
    /// A guess was submitted after the session already ended in a win or a
    /// loss. This is a caller bug, not a gameplay outcome.
    SessionTerminated,
    /// Rejected settings at construction time (zero word length, zero guess
    /// budget, empty alphabet, unusable word list).
    InvalidConfiguration(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => {
                write!(f, "Guess must be exactly {expected} letters, got {found}")
            }
            Self::SessionTerminated => {
                write!(f, "Session already ended; no further guesses accepted")
            }
            Self::InvalidConfiguration(reason) => {
                write!(f, "Invalid game configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_message_names_both_lengths() {
        let err = GameError::InvalidLength {
            expected: 5,
            found: 3,
        };
        let message = err.to_string();
        assert!(message.contains('5'));
        assert!(message.contains('3'));
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(GameError::SessionTerminated, GameError::SessionTerminated);
        assert_ne!(
            GameError::SessionTerminated,
            GameError::InvalidConfiguration("word length must be at least 1".to_string())
        );
    }
}
