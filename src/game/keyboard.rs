//! Cumulative per-letter feedback for annotating a keyboard

use crate::core::{Feedback, LetterFeedback, Word};
use rustc_hash::FxHashMap;

/// Best feedback ever observed for each letter
///
/// Entries only move up the precedence order `Absent < Present < Correct`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<char, LetterFeedback>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `feedback` for `letter`, keeping the better of old and new
    ///
    /// Returns `true` if the stored value changed.
    pub fn update(&mut self, letter: char, feedback: LetterFeedback) -> bool {
        let letter = letter.to_ascii_lowercase();
        match self.keys.get(&letter) {
            Some(&current) if current >= feedback => false,
            _ => {
                self.keys.insert(letter, feedback);
                true
            }
        }
    }

    /// Fold every letter of an evaluated guess into the map
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &fb) in guess.letters().iter().zip(feedback.letters()) {
            self.update(char::from(letter), fb);
        }
    }

    /// Feedback for a letter, or `None` if it has not been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterFeedback> {
        self.keys.get(&letter.to_ascii_lowercase()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::{Absent, Correct, Present};
    use super::*;

    #[test]
    fn unseen_letters_have_no_entry() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.get('a'), None);
        assert!(keyboard.is_empty());
    }

    #[test]
    fn upgrades_follow_precedence() {
        let mut keyboard = KeyboardState::new();
        assert!(keyboard.update('e', Absent));
        assert!(keyboard.update('e', Present));
        assert!(keyboard.update('e', Correct));
        assert_eq!(keyboard.get('e'), Some(Correct));
    }

    #[test]
    fn never_downgrades() {
        let mut keyboard = KeyboardState::new();
        keyboard.update('e', Correct);
        assert!(!keyboard.update('e', Present));
        assert!(!keyboard.update('e', Absent));
        assert_eq!(keyboard.get('e'), Some(Correct));

        keyboard.update('s', Present);
        assert!(!keyboard.update('s', Absent));
        assert_eq!(keyboard.get('s'), Some(Present));
    }

    #[test]
    fn letters_are_case_insensitive() {
        let mut keyboard = KeyboardState::new();
        keyboard.update('Q', Present);
        assert_eq!(keyboard.get('q'), Some(Present));
        assert_eq!(keyboard.len(), 1);
    }

    #[test]
    fn record_keeps_best_feedback_for_repeated_letters() {
        // SPEED vs ABIDE: first E is Present, second E is Absent
        let guess = Word::new("speed").unwrap();
        let solution = Word::new("abide").unwrap();
        let feedback = Feedback::calculate(&guess, &solution);

        let mut keyboard = KeyboardState::new();
        keyboard.record(&guess, &feedback);

        assert_eq!(keyboard.get('e'), Some(Present));
        assert_eq!(keyboard.get('d'), Some(Present));
        assert_eq!(keyboard.get('s'), Some(Absent));
        assert_eq!(keyboard.get('p'), Some(Absent));
        assert_eq!(keyboard.len(), 4);
    }
}
