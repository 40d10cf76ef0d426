//! Word lists and the word source used by the game
//!
//! Provides embedded word lists compiled into the binary, plus the
//! `Dictionary` that answers membership queries and picks solutions.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{COMMON, COMMON_COUNT, EXTENDED, EXTENDED_COUNT};
pub use source::{Dictionary, WordSource, WordSourceError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_count_matches_const() {
        assert_eq!(COMMON.len(), COMMON_COUNT);
    }

    #[test]
    fn extended_count_matches_const() {
        assert_eq!(EXTENDED.len(), EXTENDED_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase_letters() {
        for &word in COMMON.iter().chain(EXTENDED) {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn common_list_has_mixed_lengths() {
        assert!(COMMON.iter().any(|w| w.len() == 5));
        assert!(COMMON.iter().any(|w| w.len() != 5));
    }

    #[test]
    fn extended_words_are_five_letters() {
        for &word in EXTENDED {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
        }
    }
}
