//! Vocabulary statistics

use crate::wordlists::{Dictionary, WordSource};

/// How much of the vocabulary is playable at a given word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordStats {
    pub word_length: usize,
    /// Common words of `word_length` letters, i.e. possible solutions
    pub solutions: usize,
    pub common: usize,
    pub vocabulary: usize,
}

#[must_use]
pub fn word_stats(dictionary: &Dictionary, word_length: usize) -> WordStats {
    WordStats {
        word_length,
        solutions: dictionary.candidates(word_length).len(),
        common: dictionary.common_len(),
        vocabulary: dictionary.vocabulary_len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_by_length() {
        let dict = Dictionary::from_slices(&["crane", "slate", "cat"], &["zebra", "crane"]);
        let stats = word_stats(&dict, 5);
        assert_eq!(stats.solutions, 2);
        assert_eq!(stats.common, 3);
        assert_eq!(stats.vocabulary, 4);
        assert_eq!(word_stats(&dict, 4).solutions, 0);
    }
}
