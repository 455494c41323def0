//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and plain CLI play modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::run_simple,
    core::GameConfig,
    interactive::{App, run_tui},
    secret::SecretSource,
    words::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word within the guess budget",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length
    #[arg(short = 'l', long, global = true, default_value_t = GameConfig::DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Maximum number of guesses
    #[arg(short = 'g', long, global = true, default_value_t = GameConfig::DEFAULT_MAX_GUESSES)]
    guesses: usize,

    /// Seed for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Draw secrets from a word list file instead of random letters
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Compare guesses case-insensitively
    #[arg(long, global = true)]
    ignore_case: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain line-based CLI mode
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(
        cli.length,
        cli.guesses,
        ('a'..='z').collect(),
        !cli.ignore_case,
    )?;

    let mut secrets = build_secret_source(&cli, &config)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(config, secrets),
        Commands::Simple => run_simple(&config, &mut secrets).map_err(|e| anyhow::anyhow!(e)),
    }
}

/// Pick the secret source from the -w flag
///
/// Default: uniform random characters over the alphabet. With a word list,
/// secrets are sampled from the file's suitable entries.
fn build_secret_source(cli: &Cli, config: &GameConfig) -> Result<SecretSource> {
    match &cli.wordlist {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            Ok(SecretSource::from_words(words, config, cli.seed)?)
        }
        None => Ok(SecretSource::random(cli.seed)),
    }
}

fn run_play_command(config: GameConfig, secrets: SecretSource) -> Result<()> {
    let app = App::new(config, secrets)?;
    run_tui(app)
}
