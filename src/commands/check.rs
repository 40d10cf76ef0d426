//! Evaluate a single guess against a chosen solution

use crate::core::{Feedback, Word};
use crate::game::Attempt;
use crate::wordlists::WordSource;

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub solution: Word,
    pub feedback: Feedback,
    /// Whether the guess would be accepted in a real game
    pub guess_is_word: bool,
}

impl CheckResult {
    #[must_use]
    pub fn attempt(&self) -> Attempt {
        Attempt {
            word: self.guess.clone(),
            feedback: self.feedback.clone(),
        }
    }
}

/// Evaluate `guess` against `solution`
///
/// Words outside the vocabulary are still evaluated; `guess_is_word` records
/// whether the game would have accepted the guess.
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
///
/// # Examples
/// ```
/// use wordle_game::commands::check_guess;
/// use wordle_game::wordlists::Dictionary;
///
/// let dict = Dictionary::from_slices(&["crane"], &["trace"]);
/// let result = check_guess("TRACE", "crane", &dict).unwrap();
/// assert_eq!(result.feedback.to_emoji(), "⬜🟩🟩🟨🟩");
/// assert!(result.guess_is_word);
/// ```
pub fn check_guess<S: WordSource>(
    guess: &str,
    solution: &str,
    source: &S,
) -> Result<CheckResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess '{guess}': {e}"))?;
    let solution =
        Word::new(solution).map_err(|e| format!("Invalid solution '{solution}': {e}"))?;

    if guess.len() != solution.len() {
        return Err(format!(
            "Guess has {} letters but solution has {}",
            guess.len(),
            solution.len()
        ));
    }

    let feedback = Feedback::calculate(&guess, &solution);
    let guess_is_word = source.is_word(guess.text());

    Ok(CheckResult {
        guess,
        solution,
        feedback,
        guess_is_word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    fn dict() -> Dictionary {
        Dictionary::from_slices(&["crane", "erase"], &["speed"])
    }

    #[test]
    fn check_known_words() {
        let result = check_guess("speed", "erase", &dict()).unwrap();
        assert_eq!(result.feedback.to_emoji(), "🟨⬜🟨🟨⬜");
        assert!(result.guess_is_word);
        assert_eq!(result.attempt().word.text(), "speed");
    }

    #[test]
    fn check_flags_unknown_guess() {
        let result = check_guess("qwert", "crane", &dict()).unwrap();
        assert!(!result.guess_is_word);
    }

    #[test]
    fn check_rejects_length_mismatch() {
        let err = check_guess("cat", "crane", &dict()).unwrap_err();
        assert!(err.contains("3 letters"));
    }

    #[test]
    fn check_handles_very_long_words() {
        let word = "a".repeat(256);
        let result = check_guess(&word, &word, &dict()).unwrap();
        assert!(result.feedback.is_perfect());
        assert!(!result.guess_is_word);
    }

    #[test]
    fn check_rejects_malformed_words() {
        assert!(check_guess("cr4ne", "crane", &dict()).is_err());
        assert!(check_guess("crane", "", &dict()).is_err());
    }
}
