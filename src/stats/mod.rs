//! Game statistics
//!
//! Counters updated exactly once per completed game, persisted between
//! sessions by [`StatsStore`].

mod store;

pub use store::StatsStore;

use serde::{Deserialize, Serialize};

/// Lifetime play statistics
///
/// Serialized with the camelCase keys the persisted record format uses
/// (`gamesPlayed`, `gamesWon`, `currentStreak`, `maxStreak`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl Statistics {
    /// Record a won game: extends the streak and ratchets the maximum
    pub fn record_win(&mut self) {
        self.games_played += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
    }

    /// Record a lost game: the streak resets to zero
    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
    }

    /// Fraction of games won, 0.0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played)
        }
    }
}
