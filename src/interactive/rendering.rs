//! TUI rendering with ratatui
//!
//! Draws the board, the on-screen keyboard, and the surrounding panels.
//! Everything here reads presentation state; nothing mutates the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{KeyboardHints, MAX_GUESSES};

const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - board on the left, info on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Status bar
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 W O R D L E 🟨")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];

    for row in 0..MAX_GUESSES {
        lines.push(board_row(app, row));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

/// One board row: completed, in-progress, or empty
fn board_row(app: &App, row: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    if let Some(completed) = app.rows.get(row) {
        for (i, status) in completed.feedback.iter().enumerate() {
            spans.push(Span::styled(
                format!(" {} ", completed.guess.letter_at(i) as char),
                tile_style(status),
            ));
            spans.push(Span::raw(" "));
        }
    } else if row == app.game.current_row() && !app.game.is_over() {
        let buffer = app.game.buffer();
        for i in 0..WORD_LENGTH {
            let span = if let Some(&letter) = buffer.get(i) {
                Span::styled(
                    format!(" {} ", letter as char),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(" _ ", Style::default().fg(Color::DarkGray))
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
    } else {
        for _ in 0..WORD_LENGTH {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(" "));
        }
    }

    Line::from(spans)
}

fn tile_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Keyboard
            Constraint::Min(5),     // Messages
            Constraint::Length(8),  // Statistics
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.game.keyboard();
    let mut lines = Vec::with_capacity(KEY_ROWS.len());

    for (i, row) in KEY_ROWS.iter().enumerate() {
        let mut spans = vec![Span::raw(" ".repeat(i))];
        for ch in row.chars() {
            spans.push(key_span(hints, ch));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn key_span(hints: &KeyboardHints, key: char) -> Span<'static> {
    let style = match hints.status_of(key as u8) {
        Some(LetterStatus::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Absent) => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    };
    Span::styled(key.to_string(), style)
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

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let content = vec![
        Line::from(format!("Played:         {}", stats.games_played)),
        Line::from(format!("Won:            {}", stats.games_won)),
        Line::from(format!("Win rate:       {:.0}%", stats.win_rate() * 100.0)),
        Line::from(format!("Current streak: {}", stats.current_streak)),
        Line::from(format!("Max streak:     {}", stats.max_streak)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let progress = if let Some(outcome) = &app.outcome {
        if outcome.won {
            format!("Won in {}/{}", outcome.rows_used, MAX_GUESSES)
        } else {
            format!("Lost - word was {}", outcome.target.text())
        }
    } else {
        format!("Row {}/{}", app.game.current_row() + 1, MAX_GUESSES)
    };
    let progress_widget = Paragraph::new(progress).alignment(Alignment::Center);
    f.render_widget(progress_widget, chunks[0]);

    let help_text = if app.game.is_over() {
        "n: New Game | q: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
