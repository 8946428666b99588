//! Simple interactive CLI mode
//!
//! Text-based play without the TUI. One guess per line; evaluated rows are
//! printed as colored tiles with a keyboard summary underneath.

use std::io::{self, Write};

use crate::core::{WORD_LENGTH, Word};
use crate::game::{Game, GameEvent, MAX_GUESSES};
use crate::output::formatters::{keyboard_row, tile_row};
use crate::output::{print_game_over, print_statistics};
use crate::stats::StatsStore;

const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the candidate list is empty or reading user input
/// fails.
pub fn run_simple(targets: &[Word], store: &StatsStore) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Terminal Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries.");
    println!("After each guess the tiles show how close you were:\n");
    println!("  - Green: right letter, right spot");
    println!("  - Yellow: right letter, wrong spot");
    println!("  - Gray: letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new word, 'stats' for statistics\n");

    let mut stats = store.load();
    let mut game =
        Game::new(targets.to_vec()).ok_or_else(|| "Candidate word list is empty".to_string())?;

    loop {
        let prompt = format!("Guess {}/{}", game.current_row() + 1, MAX_GUESSES);
        let input = get_user_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "stats" => {
                print_statistics(&stats);
                continue;
            }
            word => {
                // Shape check only. There is deliberately no dictionary:
                // any five letters are a playable guess.
                if Word::new(word).is_err() {
                    println!(
                        "❌ Guesses must be exactly {WORD_LENGTH} letters (A-Z), got '{word}'\n"
                    );
                    continue;
                }

                for ch in word.chars() {
                    game.add_letter(ch);
                }

                for event in game.submit_guess() {
                    match event {
                        GameEvent::RowEvaluated {
                            guess, feedback, ..
                        } => {
                            println!("\n  {}\n", tile_row(&guess, &feedback));
                            for keys in KEY_ROWS {
                                println!("    {}", keyboard_row(game.keyboard(), keys));
                            }
                            println!();
                        }
                        GameEvent::GameEnded {
                            won,
                            target,
                            rows_used,
                        } => {
                            if won {
                                stats.record_win();
                            } else {
                                stats.record_loss();
                            }
                            if let Err(e) = store.save(&stats) {
                                println!("⚠️  Could not save statistics: {e}");
                            }

                            print_game_over(won, &target, rows_used);
                            print_statistics(&stats);

                            match get_user_input("Play again? (yes/no)")?
                                .to_lowercase()
                                .as_str()
                            {
                                "yes" | "y" => {
                                    game.reset();
                                    println!("\n🔄 New game started!\n");
                                }
                                _ => {
                                    println!("\n👋 Thanks for playing!\n");
                                    return Ok(());
                                }
                            }
                        }
                        GameEvent::LetterComposed { .. } | GameEvent::LetterRemoved { .. } => {}
                    }
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
