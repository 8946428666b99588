//! TUI application state and logic
//!
//! The `App` is a presentation-layer consumer of the game core: it owns a
//! [`Game`], feeds key presses into it as commands, and accumulates the
//! emitted events into the row history the board renders from.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use crate::core::{Feedback, Word};
use crate::game::{Game, GameEvent};
use crate::stats::{Statistics, StatsStore};

/// A submitted row, kept by the presentation layer for the board
#[derive(Debug, Clone)]
pub struct CompletedRow {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Terminal outcome of the current game
#[derive(Debug, Clone)]
pub struct Outcome {
    pub won: bool,
    pub target: Word,
    pub rows_used: usize,
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

/// Application state
pub struct App {
    pub game: Game,
    pub rows: Vec<CompletedRow>,
    pub outcome: Option<Outcome>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    store: StatsStore,
}

impl App {
    /// Create the app with a freshly drawn target
    ///
    /// Returns `None` if the candidate list is empty.
    #[must_use]
    pub fn new(targets: Vec<Word>, store: StatsStore) -> Option<Self> {
        let game = Game::new(targets)?;
        let stats = store.load();

        Some(Self {
            game,
            rows: Vec::new(),
            outcome: None,
            messages: vec![
                Message {
                    text: "Guess the word! Type letters, Enter submits.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Backspace deletes, Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats,
            should_quit: false,
            store,
        })
    }

    pub fn on_letter(&mut self, letter: char) {
        self.game.add_letter(letter);
    }

    pub fn on_backspace(&mut self) {
        self.game.delete_letter();
    }

    pub fn on_enter(&mut self) {
        let events = self.game.submit_guess();
        if events.is_empty() && !self.game.is_over() {
            self.add_message("Not enough letters!", MessageStyle::Error);
            return;
        }
        self.apply_events(events);
    }

    /// Fold game events into the presentation state
    fn apply_events(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::RowEvaluated {
                    guess, feedback, ..
                } => {
                    self.rows.push(CompletedRow { guess, feedback });
                }
                GameEvent::GameEnded {
                    won,
                    target,
                    rows_used,
                } => {
                    if won {
                        self.stats.record_win();
                        let celebration = match rows_used {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                    } else {
                        self.stats.record_loss();
                        self.add_message(
                            &format!("The word was {}", target.text()),
                            MessageStyle::Error,
                        );
                    }

                    if let Err(e) = self.store.save(&self.stats) {
                        self.add_message(
                            &format!("Could not save statistics: {e}"),
                            MessageStyle::Error,
                        );
                    }

                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    self.outcome = Some(Outcome {
                        won,
                        target,
                        rows_used,
                    });
                }
                GameEvent::LetterComposed { .. } | GameEvent::LetterRemoved { .. } => {}
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.rows.clear();
        self.outcome = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
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

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else if app.game.is_over() {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Wait for an explicit choice on the end screen
                    }
                }
            } else {
                match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.on_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.on_backspace();
                    }
                    KeyCode::Enter => {
                        app.on_enter();
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
