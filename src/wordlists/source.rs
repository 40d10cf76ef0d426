//! Word membership and solution selection
//!
//! The game only needs two things from a vocabulary: whether a string is an
//! accepted word, and a random candidate solution of a given length.

use super::loader::words_from_slice;
use super::{COMMON, EXTENDED};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error raised when a solution cannot be chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    /// The common list has no word of the requested length
    NoWordsOfLength(usize),
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsOfLength(len) => write!(
                f,
                "The list of common words does not have any words that are {len} long!"
            ),
        }
    }
}

impl std::error::Error for WordSourceError {}

/// A vocabulary the game can validate guesses against and draw solutions from
pub trait WordSource {
    /// Case-insensitive membership test against every accepted word
    fn is_word(&self, text: &str) -> bool;

    /// Candidate solutions of exactly `length` letters
    fn candidates(&self, length: usize) -> Vec<&Word>;

    /// Pick a solution uniformly from the candidates of `length` letters
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::NoWordsOfLength` if there are no candidates.
    fn random_word<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<Word, WordSourceError> {
        self.candidates(length)
            .choose(rng)
            .map(|&word| word.clone())
            .ok_or(WordSourceError::NoWordsOfLength(length))
    }
}

/// Two-tier vocabulary: common words (solutions) plus extended words (guesses only)
#[derive(Debug, Clone)]
pub struct Dictionary {
    common: Vec<Word>,
    vocabulary: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from the common and extended word sets
    ///
    /// Membership covers the union of both sets.
    #[must_use]
    pub fn new(common: Vec<Word>, extended: Vec<Word>) -> Self {
        let vocabulary = common
            .iter()
            .chain(&extended)
            .map(|word| word.text().to_string())
            .collect();

        Self { common, vocabulary }
    }

    /// Dictionary built from the word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(COMMON), words_from_slice(EXTENDED))
    }

    /// Dictionary built from string slices, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::{Dictionary, WordSource};
    ///
    /// let dict = Dictionary::from_slices(&["crane"], &["xylyl"]);
    /// assert!(dict.is_word("CRANE"));
    /// assert!(dict.is_word("xylyl"));
    /// assert_eq!(dict.candidates(5).len(), 1);
    /// ```
    #[must_use]
    pub fn from_slices(common: &[&str], extended: &[&str]) -> Self {
        Self::new(words_from_slice(common), words_from_slice(extended))
    }

    /// Number of common words
    #[must_use]
    pub fn common_len(&self) -> usize {
        self.common.len()
    }

    /// Number of distinct accepted words
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

impl WordSource for Dictionary {
    fn is_word(&self, text: &str) -> bool {
        self.vocabulary.contains(&text.to_ascii_lowercase())
    }

    fn candidates(&self, length: usize) -> Vec<&Word> {
        self.common.iter().filter(|w| w.len() == length).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small() -> Dictionary {
        Dictionary::from_slices(&["crane", "slate", "ocean", "cat", "volume"], &["aback", "zebra"])
    }

    #[test]
    fn membership_covers_both_sets() {
        let dict = small();
        assert!(dict.is_word("crane"));
        assert!(dict.is_word("aback"));
        assert!(dict.is_word("cat"));
        assert!(!dict.is_word("qwert"));
        assert!(!dict.is_word(""));
    }

    #[test]
    fn membership_is_case_insensitive() {
        let dict = small();
        assert!(dict.is_word("CRANE"));
        assert!(dict.is_word("Zebra"));
    }

    #[test]
    fn candidates_come_from_common_only() {
        let dict = small();
        let texts: Vec<&str> = dict.candidates(5).into_iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "ocean"]);
        assert_eq!(dict.candidates(6).len(), 1);
        assert!(dict.candidates(7).is_empty());
    }

    #[test]
    fn random_word_has_requested_length() {
        let dict = small();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = dict.random_word(5, &mut rng).unwrap();
            assert_eq!(word.len(), 5);
            assert!(["crane", "slate", "ocean"].contains(&word.text()));
        }
    }

    #[test]
    fn random_word_is_deterministic_for_a_seed() {
        let dict = small();
        let a = dict.random_word(5, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = dict.random_word(5, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_word_fails_without_candidates() {
        let dict = small();
        let err = dict.random_word(4, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err, WordSourceError::NoWordsOfLength(4));
        assert!(err.to_string().contains("4 long"));
    }

    #[test]
    fn extended_words_are_never_solutions() {
        let dict = Dictionary::from_slices(&["crane"], &["zebra"]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(dict.random_word(5, &mut rng).unwrap().text(), "crane");
        }
    }

    #[test]
    fn embedded_dictionary_has_five_letter_solutions() {
        let dict = Dictionary::embedded();
        assert!(!dict.candidates(5).is_empty());
        assert!(dict.is_word("crane"));
        assert!(dict.vocabulary_len() >= dict.common_len());
    }
}
