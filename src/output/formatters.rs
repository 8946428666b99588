//! Formatting utilities for terminal output

use colored::Colorize;

use crate::core::{Feedback, LetterStatus, Word};
use crate::game::KeyboardHints;

/// Format an evaluated guess as a row of colored tiles
#[must_use]
pub fn tile_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.iter())
        .map(|(&letter, status)| {
            let cell = format!(" {} ", letter as char);
            match status {
                LetterStatus::Correct => cell.black().on_green().to_string(),
                LetterStatus::Present => cell.black().on_yellow().to_string(),
                LetterStatus::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one keyboard row, coloring keys by their aggregate status
///
/// Letters the player has not used yet stay uncolored.
#[must_use]
pub fn keyboard_row(hints: &KeyboardHints, letters: &str) -> String {
    letters
        .chars()
        .map(|ch| {
            let key = ch.to_string();
            match hints.status_of(ch as u8) {
                Some(LetterStatus::Correct) => key.black().on_green().to_string(),
                Some(LetterStatus::Present) => key.black().on_yellow().to_string(),
                Some(LetterStatus::Absent) => key.bright_black().to_string(),
                None => key,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn plain(s: &str) -> String {
        // Strip ANSI escapes so assertions see only the text
        let mut out = String::new();
        let mut in_escape = false;
        for ch in s.chars() {
            match ch {
                '\u{1b}' => in_escape = true,
                'm' if in_escape => in_escape = false,
                _ if !in_escape => out.push(ch),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn tile_row_shows_all_letters() {
        let guess = Word::new("trace").unwrap();
        let target = Word::new("react").unwrap();
        let row = tile_row(&guess, &Feedback::evaluate(&guess, &target));

        let text = plain(&row);
        for letter in ['T', 'R', 'A', 'C', 'E'] {
            assert!(text.contains(letter), "missing {letter} in {text}");
        }
    }

    #[test]
    fn keyboard_row_shows_all_keys() {
        let hints = KeyboardHints::new();
        let row = keyboard_row(&hints, "QWERTYUIOP");
        assert_eq!(plain(&row), "Q W E R T Y U I O P");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
