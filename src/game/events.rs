//! Output events emitted by game commands
//!
//! The state machine keeps no history of completed rows; consumers that
//! want one (the board renderer, a share-sheet printer) accumulate these.

use crate::core::{Feedback, Word};

/// A state change worth showing to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A letter was appended to the guess buffer
    LetterComposed { position: usize, letter: u8 },

    /// The last letter was removed from the guess buffer
    LetterRemoved { position: usize },

    /// A full guess was evaluated against the target
    RowEvaluated {
        row: usize,
        guess: Word,
        feedback: Feedback,
    },

    /// The game reached a terminal state
    GameEnded {
        won: bool,
        target: Word,
        rows_used: usize,
    },
}
