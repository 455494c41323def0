//! Display functions for the CLI game

use super::formatters::{colorize_guess, indicator_line};
use crate::core::{Feedback, GameConfig, SessionState};
use colored::Colorize;

/// Print the welcome banner and the indicator legend
///
/// `random_secrets` switches the description of where the word comes from.
pub fn print_intro(config: &GameConfig, random_secrets: bool) {
    println!("\n{}", "═".repeat(62).cyan());
    println!("{}", " Welcome to Wordle! ".bright_cyan().bold());
    println!("{}", "═".repeat(62).cyan());

    println!("\nHere are some basic instructions:");
    println!("A blank beneath your guess means the character above it is correct.");
    println!("A \"*\" means that character is in the word, but somewhere else.");
    println!("A \"^\" means that character is not in the word at all.");

    if random_secrets {
        println!(
            "\nThe word is {} random characters, so it's probably not even a real word.",
            config.word_length()
        );
    } else {
        println!(
            "\nThe word is {} letters, drawn from your word list.",
            config.word_length()
        );
    }
    println!(
        "You have {} guesses. Good luck!\n",
        config.max_guesses()
    );
}

/// Print a guess with its indicator line aligned beneath it
pub fn print_turn(guess: &str, feedback: &Feedback) {
    println!("  {}", colorize_guess(guess, feedback));
    println!("  {}", indicator_line(feedback));
}

/// Print the remaining-guess countdown after a miss
pub fn print_remaining(remaining: usize) {
    if remaining == 1 {
        println!("{}\n", "1 guess left!".yellow());
    } else {
        println!("{remaining} guesses left!\n");
    }
}

/// Print the end-of-game banner
///
/// Only meaningful for terminal states; an in-progress state prints
/// nothing.
pub fn print_outcome(state: SessionState, secret: &str) {
    match state {
        SessionState::Won { attempts_used: 1 } => {
            println!(
                "\n{}",
                format!("Wow! You managed to guess \"{secret}\" in a single attempt!")
                    .green()
                    .bold()
            );
        }
        SessionState::Won { attempts_used } => {
            println!(
                "\n{}",
                format!("You did it! You guessed \"{secret}\" in {attempts_used} attempts!")
                    .green()
                    .bold()
            );
        }
        SessionState::Lost => {
            println!(
                "\n{}",
                format!("Out of guesses! You failed to guess \"{secret}\".")
                    .red()
                    .bold()
            );
        }
        SessionState::InProgress { .. } => {}
    }
}
