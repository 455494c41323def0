//! TUI rendering with ratatui
//!
//! Draws the guess board, the message log, and the session status.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Mark;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Stats and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Status bar
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE - Guess the hidden word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(mark: Mark) -> Style {
    match mark {
        Mark::Exact => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Mark::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Mark::Absent => Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let word_length = app.config.word_length();
    let mut lines: Vec<Line> = vec![Line::from("")];

    // Played rows, colored by their feedback
    for (guess, feedback) in app.session.history() {
        let mut spans = vec![Span::raw(" ")];
        for (ch, &mark) in guess.chars().zip(feedback.marks()) {
            spans.push(Span::styled(
                format!(" {} ", ch.to_uppercase()),
                cell_style(mark),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // The row being typed
    if app.input_mode == InputMode::Guessing {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let mut spans = vec![Span::raw(" ")];
        for i in 0..word_length {
            let cell = typed.get(i).map_or("_".to_string(), |ch| {
                ch.to_uppercase().to_string()
            });
            spans.push(Span::styled(
                format!(" {cell} "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Untouched rows up to the guess budget
    let rows_shown = app.session.history().len()
        + usize::from(app.input_mode == InputMode::Guessing);
    for _ in rows_shown..app.config.max_guesses() {
        let mut spans = vec![Span::raw(" ")];
        for _ in 0..word_length {
            spans.push(Span::styled(
                " · ",
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match app.input_mode {
        InputMode::Guessing => " Board ",
        InputMode::GameOver => " Board - game over ",
    };

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Statistics
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(format!(
            "Games: {}   Won: {}   Win rate: {:.0}%",
            app.stats.total_games,
            app.stats.games_won,
            app.stats.win_rate()
        )),
        Line::from(""),
    ];

    // One bar per attempt count, sized against the best bucket
    let max_count = app
        .stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);
    for (attempts, &count) in app.stats.guess_distribution.iter().enumerate().skip(1) {
        let bar_width = count * 20 / max_count;
        lines.push(Line::from(vec![
            Span::raw(format!(" {attempts}: ")),
            Span::styled("█".repeat(bar_width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let stats = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(stats, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let remaining = Paragraph::new(format!(
        "Guesses left: {}",
        app.session.remaining_guesses()
    ))
    .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[0]);

    let reveal_text = match &app.reveal {
        Some(secret) => format!("The word was: {}", secret.to_uppercase()),
        None => format!("Word length: {}", app.config.word_length()),
    };
    let reveal = Paragraph::new(reveal_text).alignment(Alignment::Center);
    f.render_widget(reveal, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit",
        InputMode::GameOver => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
