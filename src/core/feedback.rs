//! Guess feedback calculation and representation
//!
//! Feedback classifies each position of a submitted guess against the
//! target word:
//! - `Absent` (gray): letter has no remaining occurrence in the target
//! - `Present` (yellow): letter in the target, wrong position
//! - `Correct` (green): letter in the correct position

use std::ops::Index;

use super::{WORD_LENGTH, Word};

/// Per-position classification of a guessed letter
///
/// The derived ordering (`Absent < Present < Correct`) is the precedence
/// used when aggregating statuses across guesses: a letter's status only
/// ever upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

/// Feedback for a full guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    statuses: [LetterStatus; WORD_LENGTH],
}

impl Feedback {
    /// All greens (winning guess)
    pub const WIN: Self = Self {
        statuses: [LetterStatus::Correct; WORD_LENGTH],
    };

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Implements the exact duplicate-letter rules: a repeated guess letter
    /// earns `Present` at most as many times as unconsumed occurrences
    /// remain in the target.
    ///
    /// # Algorithm
    /// 1. Every position starts `Absent`
    /// 2. First pass: mark exact matches `Correct`, consuming that
    ///    occurrence from the target's letter pool
    /// 3. Second pass: mark remaining positions `Present` while unconsumed
    ///    occurrences of their letter remain, consuming one per hit
    ///
    /// Pure and deterministic; calling it twice with the same inputs yields
    /// the same result.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let target = Word::new("react").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// // T(present) R(present) A(correct) C(correct) E(present)
    /// assert_eq!(feedback[2], LetterStatus::Correct);
    /// assert!(!feedback.is_win());
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for (i, status) in statuses.iter_mut().enumerate() {
            if guess.letter_at(i) == target.letter_at(i) {
                *status = LetterStatus::Correct;

                // Remove from available pool
                if let Some(count) = available.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, bounded by remaining occurrences
        for (i, status) in statuses.iter_mut().enumerate() {
            if *status == LetterStatus::Absent
                && let Some(count) = available.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                *status = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self { statuses }
    }

    /// Get the per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.statuses
    }

    /// Iterate over statuses in position order
    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.statuses.iter().copied()
    }

    /// Check if this feedback is a winning guess (all greens)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.statuses == [LetterStatus::Correct; WORD_LENGTH]
    }

    /// Count the number of `Correct` positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.iter()
            .filter(|&s| s == LetterStatus::Correct)
            .count()
    }

    /// Count the number of `Present` positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.iter()
            .filter(|&s| s == LetterStatus::Present)
            .count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter()
            .map(|status| match status {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                LetterStatus::Absent => '⬜',
            })
            .collect()
    }
}

impl Index<usize> for Feedback {
    type Output = LetterStatus;

    fn index(&self, position: usize) -> &Self::Output {
        &self.statuses[position]
    }
}
