//! Game configuration
//!
//! Settings are validated once at construction so the session and the
//! secret source can rely on them without re-checking.

use super::GameError;

/// Settings for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_guesses: usize,
    alphabet: Vec<char>,
    case_sensitive: bool,
}

impl Default for GameConfig {
    /// The classic game: 5-letter words, 6 guesses, lowercase a-z
    fn default() -> Self {
        Self {
            word_length: Self::DEFAULT_WORD_LENGTH,
            max_guesses: Self::DEFAULT_MAX_GUESSES,
            alphabet: ('a'..='z').collect(),
            case_sensitive: true,
        }
    }
}

impl GameConfig {
    pub const DEFAULT_WORD_LENGTH: usize = 5;
    pub const DEFAULT_MAX_GUESSES: usize = 6;

    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns [`GameError::InvalidConfiguration`] if `word_length` or
    /// `max_guesses` is zero, or if the alphabet is empty.
    pub fn new(
        word_length: usize,
        max_guesses: usize,
        alphabet: Vec<char>,
        case_sensitive: bool,
    ) -> Result<Self, GameError> {
        if word_length == 0 {
            return Err(GameError::InvalidConfiguration(
                "word length must be at least 1".to_string(),
            ));
        }
        if max_guesses == 0 {
            return Err(GameError::InvalidConfiguration(
                "guess budget must be at least 1".to_string(),
            ));
        }
        if alphabet.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "alphabet must not be empty".to_string(),
            ));
        }

        Ok(Self {
            word_length,
            max_guesses,
            alphabet,
            case_sensitive,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Fold player input per the case-sensitivity setting
    ///
    /// Case-sensitive games pass input through untouched; otherwise both
    /// secrets and guesses are lowercased at the session boundary, keeping
    /// the scorer a plain character-equality function.
    #[must_use]
    pub fn normalize(&self, input: &str) -> String {
        if self.case_sensitive {
            input.to_string()
        } else {
            input.to_lowercase()
        }
    }

    /// Whether a typed character can appear in a guess
    #[must_use]
    pub fn in_alphabet(&self, ch: char) -> bool {
        if self.case_sensitive {
            self.alphabet.contains(&ch)
        } else {
            ch.to_lowercase().all(|c| self.alphabet.contains(&c))
        }
    }
}
