//! TUI application state and logic

use crate::core::{GameConfig, GameError, GameSession, SessionState};
use crate::secret::SecretSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub config: GameConfig,
    secrets: SecretSource,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Secret revealed to the player after a loss
    pub reveal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts wins that took `n` attempts
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_guesses + 1],
        }
    }

    pub fn record_win(&mut self, attempts_used: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if let Some(slot) = self.guess_distribution.get_mut(attempts_used) {
            *slot += 1;
        }
    }

    pub fn record_loss(&mut self) {
        self.total_games += 1;
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Build the app around its first session
    ///
    /// # Errors
    /// Returns [`GameError`] if the generated secret does not fit the
    /// configuration, which indicates a misconfigured secret source.
    pub fn new(config: GameConfig, mut secrets: SecretSource) -> Result<Self, GameError> {
        let session = GameSession::new(secrets.next_secret(&config), config.clone())?;
        let stats = Statistics::new(config.max_guesses());

        Ok(Self {
            config,
            secrets,
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Type a guess and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Green = right spot, yellow = wrong spot, gray = not in the word."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats,
            should_quit: false,
            input_mode: InputMode::Guessing,
            reveal: None,
        })
    }

    /// Append a typed character to the pending guess
    ///
    /// Characters outside the alphabet and overflow past the word length
    /// are dropped silently, matching the original game's char boxes.
    pub fn push_char(&mut self, ch: char) {
        if self.input_mode != InputMode::Guessing {
            return;
        }
        if self.input_buffer.chars().count() < self.config.word_length()
            && self.config.in_alphabet(ch)
        {
            self.input_buffer.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the pending guess to the session
    pub fn submit(&mut self) {
        let guess = self.input_buffer.clone();

        match self.session.submit_guess(&guess) {
            Ok((_, state)) => {
                self.input_buffer.clear();
                match state {
                    SessionState::Won { attempts_used } => {
                        self.stats.record_win(attempts_used);
                        self.input_mode = InputMode::GameOver;

                        let celebration = match attempts_used {
                            1 => "HOLE IN ONE! Extraordinary!",
                            2 => "MAGNIFICENT! Two guesses!",
                            3 => "SPLENDID! Three guesses!",
                            4 => "GREAT JOB! Four guesses!",
                            5 => "NICE WORK! Five guesses!",
                            _ => "PHEW! Got it on the last try!",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message(
                            "Press 'n' for a new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    SessionState::Lost => {
                        self.stats.record_loss();
                        self.reveal = Some(self.session.secret().to_string());
                        self.input_mode = InputMode::GameOver;
                        self.add_message(
                            &format!("Out of guesses! The word was {}.", self.session.secret()),
                            MessageStyle::Error,
                        );
                        self.add_message(
                            "Press 'n' for a new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    SessionState::InProgress { remaining } => {
                        let plural = if remaining == 1 { "guess" } else { "guesses" };
                        self.add_message(
                            &format!("{remaining} {plural} left"),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(GameError::InvalidLength { expected, .. }) => {
                // The attempt is not consumed; keep the buffer for editing
                self.add_message(
                    &format!("Guess must be exactly {expected} letters!"),
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Start a fresh session with a new secret
    pub fn new_game(&mut self) {
        let secret = self.secrets.next_secret(&self.config);
        match GameSession::new(secret, self.config.clone()) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.reveal = None;
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Ignore other keys on the game-over screen
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(ch) => {
                        app.push_char(ch);
                    }
                    KeyCode::Backspace => {
                        app.pop_char();
                    }
                    KeyCode::Enter => {
                        app.submit();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(GameConfig::default(), SecretSource::random(Some(42))).unwrap()
    }

    #[test]
    fn push_char_respects_length_and_alphabet() {
        let mut app = app();

        for ch in "apple".chars() {
            app.push_char(ch);
        }
        assert_eq!(app.input_buffer, "apple");

        // Full buffer drops further input
        app.push_char('x');
        assert_eq!(app.input_buffer, "apple");

        app.pop_char();
        app.push_char('3'); // Not in the alphabet
        assert_eq!(app.input_buffer, "appl");
    }

    #[test]
    fn short_submit_is_free_and_keeps_buffer() {
        let mut app = app();
        app.push_char('a');
        app.submit();

        assert_eq!(app.input_buffer, "a");
        assert_eq!(app.session.attempts_used(), 0);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn full_game_loss_enters_game_over() {
        let mut app = app();

        for _ in 0..6 {
            app.input_buffer = "zzzzz".to_string();
            // A seeded random 5-letter secret matching "zzzzz" is not a
            // case these seeds produce; losing here is deterministic.
            app.submit();
            if app.input_mode == InputMode::GameOver {
                break;
            }
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert!(app.reveal.is_some() || app.stats.games_won == 1);
    }

    #[test]
    fn new_game_resets_the_board() {
        let mut app = app();
        app.input_buffer = "aaaaa".to_string();
        app.submit();
        app.new_game();

        assert!(app.session.history().is_empty());
        assert!(app.input_buffer.is_empty());
        assert!(app.reveal.is_none());
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn statistics_track_wins_and_losses() {
        let mut stats = Statistics::new(6);
        stats.record_win(3);
        stats.record_win(3);
        stats.record_loss();

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution[3], 2);
        assert!((stats.win_rate() - 66.666).abs() < 0.1);
    }
}
