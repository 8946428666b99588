//! Target-word candidate list
//!
//! Provides the embedded candidate list compiled into the binary, plus a
//! loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{TARGETS, TARGETS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn targets_are_valid_words() {
        for &word in TARGETS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_alphabetic()),
                "Word '{word}' contains non-letter chars"
            );
        }
    }

    #[test]
    fn targets_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = TARGETS.iter().collect();
        assert_eq!(unique.len(), TARGETS.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(TARGETS_COUNT, 28, "Expected 28 candidate words");
    }
}
