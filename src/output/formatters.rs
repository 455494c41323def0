//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::Colorize;

/// Indicator line printed beneath a guess
///
/// Index-aligned with the guess above it: a space under a correct
/// character, `*` under a misplaced one, `^` under one not in the secret.
///
/// # Examples
/// ```
/// use wordle_game::core::Feedback;
/// use wordle_game::output::formatters::indicator_line;
///
/// let feedback = Feedback::score("apple", "plpla").unwrap();
/// assert_eq!(indicator_line(&feedback), "** ^*");
/// ```
#[must_use]
pub fn indicator_line(feedback: &Feedback) -> String {
    feedback.marks().iter().map(|mark| mark.indicator()).collect()
}

/// Emoji squares for a feedback row, share-style
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.marks().iter().map(|mark| mark.emoji()).collect()
}

/// Guess rendered with one colored character per position
///
/// Green for exact matches, yellow for misplaced characters, dim for
/// absent ones. Positional alignment with the indicator line is preserved
/// because every cell stays one character wide.
#[must_use]
pub fn colorize_guess(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.marks())
        .map(|(ch, mark)| {
            let cell = ch.to_uppercase().to_string();
            match mark {
                Mark::Exact => cell.green().bold().to_string(),
                Mark::Present => cell.yellow().bold().to_string(),
                Mark::Absent => cell.bright_black().to_string(),
            }
        })
        .collect()
}
