//! JSON-backed statistics persistence
//!
//! Loading is total: a missing file, an unreadable file, and corrupt JSON
//! all fall back to zeroed statistics. Only saving can fail, and callers
//! treat that as a diagnostic, not a crash.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Statistics;

/// File-backed store for [`Statistics`]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    /// Create a store backed by the given file path
    ///
    /// The file is not touched until `load` or `save` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read statistics from disk, falling back to defaults
    ///
    /// Never fails: absent or corrupt data loads as all-zero counters.
    #[must_use]
    pub fn load(&self) -> Statistics {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Write statistics to disk
    ///
    /// # Errors
    /// Returns an I/O error if serialization or the write fails.
    pub fn save(&self, stats: &Statistics) -> io::Result<()> {
        let json = serde_json::to_string_pretty(stats).map_err(io::Error::other)?;
        fs::write(&self.path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_store(tag: &str) -> StatsStore {
        let path = env::temp_dir().join(format!("wordle_stats_{tag}_{}.json", std::process::id()));
        let _ = fs::remove_file(&path);
        StatsStore::new(path)
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let store = temp_store("missing");
        assert_eq!(store.load(), Statistics::default());
    }

    #[test]
    fn load_corrupt_file_yields_defaults() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "{not json at all").unwrap();

        assert_eq!(store.load(), Statistics::default());

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store("roundtrip");

        let mut stats = Statistics::default();
        stats.record_win();
        stats.record_win();
        stats.record_loss();

        store.save(&stats).unwrap();
        assert_eq!(store.load(), stats);

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn saved_record_uses_expected_keys() {
        let store = temp_store("keys");

        let mut stats = Statistics::default();
        stats.record_win();
        store.save(&stats).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        for key in ["gamesPlayed", "gamesWon", "currentStreak", "maxStreak"] {
            assert!(content.contains(key), "missing key {key}");
        }

        let _ = fs::remove_file(store.path());
    }
}
