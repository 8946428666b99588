//! Game state machine
//!
//! An owned [`Game`] value tracks one puzzle in progress. Commands mutate it
//! and hand structured [`GameEvent`]s back to the caller; presentation layers
//! subscribe to those events instead of reaching into the state.

mod events;
mod keyboard;
mod state;

pub use events::GameEvent;
pub use keyboard::KeyboardHints;
pub use state::{Game, Phase, Snapshot};

/// Number of guess rows before the game is lost
pub const MAX_GUESSES: usize = 6;
