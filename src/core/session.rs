//! Game session state machine
//!
//! A session owns the secret for its whole lifetime, tracks the remaining
//! guess budget, and applies the scorer to every submitted guess. It never
//! prints; callers render the returned feedback however they like.

use super::{Feedback, GameConfig, GameError};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting guesses; `remaining` attempts are left
    InProgress { remaining: usize },
    /// The secret was guessed; `attempts_used` counts the winning guess
    Won { attempts_used: usize },
    /// The guess budget ran out
    Lost,
}

impl SessionState {
    /// Whether the session stopped accepting guesses
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

/// One game: a secret, a guess budget, and the turns taken so far
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: String,
    config: GameConfig,
    state: SessionState,
    attempts_used: usize,
    history: Vec<(String, Feedback)>,
}

impl GameSession {
    /// Start a session around `secret`
    ///
    /// The secret is normalized per the config's case handling and owned by
    /// the session from here on.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidLength`] if the secret does not match
    /// the configured word length.
    pub fn new(secret: impl Into<String>, config: GameConfig) -> Result<Self, GameError> {
        let secret = config.normalize(&secret.into());
        let secret_len = secret.chars().count();
        if secret_len != config.word_length() {
            return Err(GameError::InvalidLength {
                expected: config.word_length(),
                found: secret_len,
            });
        }

        let state = SessionState::InProgress {
            remaining: config.max_guesses(),
        };

        Ok(Self {
            secret,
            config,
            state,
            attempts_used: 0,
            history: Vec::new(),
        })
    }

    /// Submit one guess and advance the state machine
    ///
    /// A wrong-length guess fails with [`GameError::InvalidLength`] and
    /// consumes nothing, so the caller may simply prompt again. Winning
    /// feedback (all `Exact`) moves the session to `Won`; a miss on the
    /// last remaining attempt moves it to `Lost`.
    ///
    /// # Errors
    /// [`GameError::InvalidLength`] for a wrong-length guess (state
    /// untouched), [`GameError::SessionTerminated`] when called after the
    /// session already ended (state untouched).
    pub fn submit_guess(&mut self, guess: &str) -> Result<(Feedback, SessionState), GameError> {
        let SessionState::InProgress { remaining } = self.state else {
            return Err(GameError::SessionTerminated);
        };

        let guess = self.config.normalize(guess);
        let guess_len = guess.chars().count();
        if guess_len != self.config.word_length() {
            return Err(GameError::InvalidLength {
                expected: self.config.word_length(),
                found: guess_len,
            });
        }

        let feedback = Feedback::score(&self.secret, &guess)?;
        self.attempts_used += 1;

        self.state = if feedback.is_win() {
            SessionState::Won {
                attempts_used: self.attempts_used,
            }
        } else if remaining == 1 {
            SessionState::Lost
        } else {
            SessionState::InProgress {
                remaining: remaining - 1,
            }
        };

        self.history.push((guess, feedback.clone()));
        Ok((feedback, self.state))
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The hidden target word (revealed to the player on a loss)
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Guesses consumed so far (wrong-length submissions do not count)
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    /// Attempts still available; zero once the session is terminal
    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        match self.state {
            SessionState::InProgress { remaining } => remaining,
            SessionState::Won { .. } | SessionState::Lost => 0,
        }
    }

    /// Every consumed guess with its feedback, in play order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(String, Feedback)] {
        &self.history
    }
}
