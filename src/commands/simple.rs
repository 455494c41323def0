//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI: prompt for a guess, print the
//! indicator line beneath it, count down the remaining attempts.

use crate::core::{GameConfig, GameError, GameSession, SessionState};
use crate::output::{print_intro, print_outcome, print_remaining, print_turn};
use crate::secret::SecretSource;
use std::io::{self, Write};

/// Run the plain CLI game loop
///
/// Plays games until the player declines to continue. Wrong-length input
/// re-prompts without spending an attempt.
///
/// # Errors
///
/// Returns an error if reading user input fails or if a session cannot be
/// constructed from the generated secret.
pub fn run_simple(config: &GameConfig, secrets: &mut SecretSource) -> Result<(), String> {
    print_intro(config, !secrets.uses_word_list());

    loop {
        let secret = secrets.next_secret(config);
        let mut session =
            GameSession::new(secret, config.clone()).map_err(|e| e.to_string())?;

        play_one_game(&mut session)?;

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!(),
            _ => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn play_one_game(session: &mut GameSession) -> Result<(), String> {
    while let SessionState::InProgress { .. } = session.state() {
        let input = get_user_input("Enter your guess")?;

        match session.submit_guess(&input) {
            Ok((feedback, state)) => {
                // Render the guess as the session recorded it so case
                // folding shows through
                let guess = session
                    .history()
                    .last()
                    .map_or(input.as_str(), |(g, _)| g.as_str());
                print_turn(guess, &feedback);

                if state.is_terminal() {
                    print_outcome(state, session.secret());
                } else if let SessionState::InProgress { remaining } = state {
                    print_remaining(remaining);
                }
            }
            Err(GameError::InvalidLength { expected, .. }) => {
                // Free retry: malformed input never consumes an attempt
                println!("Your guess must contain {expected} letters.\n");
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    println!();
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Err("input stream closed".to_string());
    }

    Ok(input.trim().to_string())
}
