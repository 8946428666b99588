//! The finite game-progress state machine
//!
//! A [`Game`] owns one puzzle: the hidden target, the guess buffer being
//! composed, the row counter, and the terminal flag. Commands with unmet
//! preconditions are silent no-ops, never errors. Stale key presses after
//! the game ends are expected input, not caller bugs.

use rand::prelude::IndexedRandom;

use super::{GameEvent, KeyboardHints, MAX_GUESSES};
use crate::core::{Feedback, WORD_LENGTH, Word};

/// Progress phase derived from the buffer and terminal flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Buffer has fewer than 5 letters
    Composing,
    /// Buffer is full, awaiting submit
    Ready,
    /// Terminal; no command except reset changes anything
    Over,
}

/// One puzzle in progress
pub struct Game {
    targets: Vec<Word>,
    target: Word,
    buffer: Vec<u8>,
    row: usize,
    over: bool,
    keyboard: KeyboardHints,
}

/// Read-only view of the game for presentation layers
///
/// The target is only revealed once the game is over.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub buffer: String,
    pub row: usize,
    pub game_over: bool,
    pub keyboard: KeyboardHints,
    pub target: Option<Word>,
}

impl Game {
    /// Start a game with a target drawn uniformly at random from `targets`
    ///
    /// Draws are with replacement: `reset` may pick the same word again.
    /// Returns `None` if the candidate list is empty.
    #[must_use]
    pub fn new(targets: Vec<Word>) -> Option<Self> {
        let target = targets.choose(&mut rand::rng())?.clone();
        Some(Self {
            targets,
            target,
            buffer: Vec::with_capacity(WORD_LENGTH),
            row: 0,
            over: false,
            keyboard: KeyboardHints::new(),
        })
    }

    /// Start a game against a known target
    ///
    /// `reset` on a game built this way redraws from the single-word list,
    /// which keeps it deterministic.
    #[must_use]
    pub fn with_target(target: Word) -> Self {
        Self {
            targets: vec![target.clone()],
            target,
            buffer: Vec::with_capacity(WORD_LENGTH),
            row: 0,
            over: false,
            keyboard: KeyboardHints::new(),
        }
    }

    /// Append a letter to the guess buffer
    ///
    /// No-op unless the game is live, the buffer has room, and `letter` is
    /// an ASCII letter (normalized to uppercase).
    pub fn add_letter(&mut self, letter: char) -> Option<GameEvent> {
        if self.over || self.buffer.len() >= WORD_LENGTH || !letter.is_ascii_alphabetic() {
            return None;
        }

        let byte = (letter as u8).to_ascii_uppercase();
        self.buffer.push(byte);
        Some(GameEvent::LetterComposed {
            position: self.buffer.len() - 1,
            letter: byte,
        })
    }

    /// Remove the last letter from the guess buffer
    ///
    /// No-op if the game is over or the buffer is empty.
    pub fn delete_letter(&mut self) -> Option<GameEvent> {
        if self.over || self.buffer.is_empty() {
            return None;
        }

        self.buffer.pop();
        Some(GameEvent::LetterRemoved {
            position: self.buffer.len(),
        })
    }

    /// Evaluate the composed guess against the target
    ///
    /// No-op (empty event list) unless the buffer is full and the game is
    /// live. Otherwise evaluates the guess, folds the feedback into the
    /// keyboard aggregate, determines the outcome, and clears the buffer
    /// and advances the row counter regardless of outcome. The whole
    /// transition completes synchronously; reveal pacing belongs to the
    /// presentation layer.
    pub fn submit_guess(&mut self) -> Vec<GameEvent> {
        if self.over || self.buffer.len() != WORD_LENGTH {
            return Vec::new();
        }

        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(&self.buffer);
        let guess = Word::from_letters(letters);

        let feedback = Feedback::evaluate(&guess, &self.target);
        self.keyboard.record_guess(&guess, &feedback);

        let row = self.row;
        let mut events = vec![GameEvent::RowEvaluated {
            row,
            guess: guess.clone(),
            feedback,
        }];

        // Win check runs before the loss check: a correct guess on the
        // final row is a win.
        if guess == self.target {
            self.over = true;
            events.push(GameEvent::GameEnded {
                won: true,
                target: self.target.clone(),
                rows_used: row + 1,
            });
        } else if row == MAX_GUESSES - 1 {
            self.over = true;
            events.push(GameEvent::GameEnded {
                won: false,
                target: self.target.clone(),
                rows_used: MAX_GUESSES,
            });
        }

        self.buffer.clear();
        self.row += 1;
        events
    }

    /// Abandon the current puzzle and draw a fresh target
    ///
    /// Callable in any phase; always succeeds. Clears the buffer, the row
    /// counter, the terminal flag, and the keyboard aggregate.
    pub fn reset(&mut self) {
        if let Some(next) = self.targets.choose(&mut rand::rng()) {
            self.target = next.clone();
        }
        self.buffer.clear();
        self.row = 0;
        self.over = false;
        self.keyboard.clear();
    }

    /// Current progress phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.over {
            Phase::Over
        } else if self.buffer.len() == WORD_LENGTH {
            Phase::Ready
        } else {
            Phase::Composing
        }
    }

    /// Letters composed so far in the current row
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Zero-based index of the row being composed
    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.row
    }

    /// Whether the game has reached a terminal state
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// Per-letter best-status aggregate for the on-screen keyboard
    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardHints {
        &self.keyboard
    }

    /// The target word, revealed only once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.over.then_some(&self.target)
    }

    /// Read-only view for presentation layers
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            buffer: self.buffer.iter().map(|&b| b as char).collect(),
            row: self.row,
            game_over: self.over,
            keyboard: self.keyboard.clone(),
            target: self.revealed_target().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    fn game(target: &str) -> Game {
        Game::with_target(Word::new(target).unwrap())
    }

    fn type_word(game: &mut Game, word: &str) {
        for ch in word.chars() {
            game.add_letter(ch);
        }
    }

    #[test]
    fn new_draws_from_candidates() {
        let targets = vec![Word::new("react").unwrap(), Word::new("stack").unwrap()];
        let game = Game::new(targets).unwrap();
        assert_eq!(game.phase(), Phase::Composing);
        assert_eq!(game.current_row(), 0);
        assert!(game.buffer().is_empty());
    }

    #[test]
    fn new_with_empty_list_fails() {
        assert!(Game::new(Vec::new()).is_none());
    }

    #[test]
    fn add_letter_fills_buffer_and_reports_position() {
        let mut g = game("react");

        let event = g.add_letter('s').unwrap();
        assert_eq!(
            event,
            GameEvent::LetterComposed {
                position: 0,
                letter: b'S'
            }
        );

        let event = g.add_letter('T').unwrap();
        assert_eq!(
            event,
            GameEvent::LetterComposed {
                position: 1,
                letter: b'T'
            }
        );

        assert_eq!(g.buffer(), b"ST");
        assert_eq!(g.phase(), Phase::Composing);
    }

    #[test]
    fn add_letter_ignored_when_buffer_full() {
        let mut g = game("react");
        type_word(&mut g, "stack");
        assert_eq!(g.phase(), Phase::Ready);

        assert!(g.add_letter('x').is_none());
        assert_eq!(g.buffer(), b"STACK");
    }

    #[test]
    fn add_letter_ignores_non_letters() {
        let mut g = game("react");
        assert!(g.add_letter('3').is_none());
        assert!(g.add_letter(' ').is_none());
        assert!(g.add_letter('é').is_none());
        assert!(g.buffer().is_empty());
    }

    #[test]
    fn delete_letter_pops_and_reports_position() {
        let mut g = game("react");
        type_word(&mut g, "sta");

        let event = g.delete_letter().unwrap();
        assert_eq!(event, GameEvent::LetterRemoved { position: 2 });
        assert_eq!(g.buffer(), b"ST");
    }

    #[test]
    fn delete_letter_ignored_on_empty_buffer() {
        let mut g = game("react");
        assert!(g.delete_letter().is_none());
    }

    #[test]
    fn ready_phase_after_fifth_letter() {
        let mut g = game("react");
        type_word(&mut g, "stac");
        assert_eq!(g.phase(), Phase::Composing);
        g.add_letter('k');
        assert_eq!(g.phase(), Phase::Ready);
        g.delete_letter();
        assert_eq!(g.phase(), Phase::Composing);
    }

    #[test]
    fn submit_ignored_with_incomplete_buffer() {
        let mut g = game("react");
        type_word(&mut g, "sta");

        assert!(g.submit_guess().is_empty());
        assert_eq!(g.current_row(), 0);
        assert_eq!(g.buffer(), b"STA");
    }

    #[test]
    fn submit_clears_buffer_and_increments_row_once() {
        let mut g = game("react");
        type_word(&mut g, "stack");

        let events = g.submit_guess();
        assert_eq!(events.len(), 1);
        assert!(g.buffer().is_empty());
        assert_eq!(g.current_row(), 1);
        assert_eq!(g.phase(), Phase::Composing);
    }

    #[test]
    fn submit_emits_row_evaluated_with_feedback() {
        let mut g = game("react");
        type_word(&mut g, "trace");

        let events = g.submit_guess();
        let GameEvent::RowEvaluated {
            row,
            guess,
            feedback,
        } = &events[0]
        else {
            panic!("expected RowEvaluated, got {events:?}");
        };

        assert_eq!(*row, 0);
        assert_eq!(guess.text(), "TRACE");
        assert_eq!(
            feedback.statuses(),
            &[Present, Present, Correct, Correct, Present]
        );
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut g = game("react");
        type_word(&mut g, "react");

        let events = g.submit_guess();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            GameEvent::GameEnded {
                won: true,
                target: Word::new("react").unwrap(),
                rows_used: 1,
            }
        );

        assert!(g.is_over());
        assert_eq!(g.phase(), Phase::Over);
        assert_eq!(g.revealed_target().unwrap().text(), "REACT");
    }

    #[test]
    fn terminal_state_is_monotonic() {
        let mut g = game("react");
        type_word(&mut g, "react");
        g.submit_guess();

        // Every further command is a no-op
        assert!(g.add_letter('a').is_none());
        assert!(g.delete_letter().is_none());
        assert!(g.submit_guess().is_empty());
        assert!(g.is_over());
        assert_eq!(g.current_row(), 1);
    }

    #[test]
    fn sixth_miss_loses_game() {
        let mut g = game("react");

        for i in 0..MAX_GUESSES {
            assert!(!g.is_over(), "game ended early at row {i}");
            type_word(&mut g, "stack");
            let events = g.submit_guess();

            if i == MAX_GUESSES - 1 {
                assert_eq!(
                    events[1],
                    GameEvent::GameEnded {
                        won: false,
                        target: Word::new("react").unwrap(),
                        rows_used: MAX_GUESSES,
                    }
                );
            } else {
                assert_eq!(events.len(), 1);
            }
        }

        assert!(g.is_over());
        assert_eq!(g.current_row(), MAX_GUESSES);
    }

    #[test]
    fn win_on_final_row_beats_loss_check() {
        let mut g = game("react");

        for _ in 0..MAX_GUESSES - 1 {
            type_word(&mut g, "stack");
            g.submit_guess();
        }

        type_word(&mut g, "react");
        let events = g.submit_guess();
        assert_eq!(
            events[1],
            GameEvent::GameEnded {
                won: true,
                target: Word::new("react").unwrap(),
                rows_used: MAX_GUESSES,
            }
        );
    }

    #[test]
    fn keyboard_aggregate_tracks_best_status() {
        let mut g = game("react");

        type_word(&mut g, "trace");
        g.submit_guess();
        assert_eq!(g.keyboard().status_of(b'A'), Some(Correct));
        assert_eq!(g.keyboard().status_of(b'T'), Some(Present));

        // OTTER's second T is Absent (REACT's lone T already consumed);
        // the aggregate must keep the earlier Present
        type_word(&mut g, "otter");
        g.submit_guess();
        assert_eq!(g.keyboard().status_of(b'T'), Some(Present));
        assert_eq!(g.keyboard().status_of(b'O'), Some(Absent));
    }

    #[test]
    fn reset_restores_fresh_state() {
        let mut g = game("react");
        type_word(&mut g, "react");
        g.submit_guess();
        assert!(g.is_over());

        g.reset();
        assert_eq!(g.phase(), Phase::Composing);
        assert_eq!(g.current_row(), 0);
        assert!(g.buffer().is_empty());
        assert!(!g.is_over());
        assert_eq!(g.keyboard().status_of(b'R'), None);
        assert!(g.revealed_target().is_none());
    }

    #[test]
    fn reset_mid_compose_clears_buffer() {
        let mut g = game("react");
        type_word(&mut g, "sta");
        g.reset();
        assert!(g.buffer().is_empty());
        assert_eq!(g.current_row(), 0);
    }

    #[test]
    fn target_hidden_while_game_is_live() {
        let mut g = game("react");
        assert!(g.revealed_target().is_none());
        assert!(g.snapshot().target.is_none());

        type_word(&mut g, "stack");
        g.submit_guess();
        assert!(g.revealed_target().is_none());
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut g = game("react");
        type_word(&mut g, "st");

        let snap = g.snapshot();
        assert_eq!(snap.buffer, "ST");
        assert_eq!(snap.row, 0);
        assert!(!snap.game_over);
        assert!(snap.target.is_none());

        type_word(&mut g, "ack");
        g.submit_guess();
        type_word(&mut g, "react");
        g.submit_guess();

        let snap = g.snapshot();
        assert!(snap.game_over);
        assert_eq!(snap.target.unwrap().text(), "REACT");
        assert_eq!(snap.keyboard.status_of(b'R'), Some(Correct));
    }
}
