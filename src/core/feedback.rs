//! Per-letter feedback calculation and representation
//!
//! Each position of a guess is classified as:
//! - Correct (green): the letter is in the solution at this position
//! - Present (yellow): the letter is in the solution at another position
//! - Absent (gray): the letter is not in the solution, or every copy is already accounted for

use super::Word;
use std::fmt;

/// Feedback for a single letter of a guess
///
/// Variants are ordered by precedence: `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

impl LetterFeedback {
    /// Emoji square used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one entry per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `solution`
    ///
    /// Duplicate letters are only credited as many times as they occur in the
    /// solution, and exact matches claim their letters first.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (Correct) and remove them from the available pool
    /// 2. Second pass, left to right: Mark Present while the pool still holds that letter
    /// 3. Everything else is Absent
    ///
    /// # Panics
    /// Panics if `guess` and `solution` differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let solution = Word::new("abide").unwrap();
    /// let feedback = Feedback::calculate(&guess, &solution);
    ///
    /// // Only one E in ABIDE, so the second E in SPEED is Absent
    /// assert_eq!(feedback.letters(), &[Absent, Absent, Present, Absent, Present]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        assert_eq!(
            guess.len(),
            solution.len(),
            "guess and solution must have the same length"
        );

        let mut result = vec![LetterFeedback::Absent; guess.len()];
        let mut available = solution.letter_counts();

        // First pass: exact position matches
        for ((slot, &g), &s) in result
            .iter_mut()
            .zip(guess.letters())
            .zip(solution.letters())
        {
            if g == s {
                *slot = LetterFeedback::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position, limited by what is left
        for (slot, &g) in result.iter_mut().zip(guess.letters()) {
            if *slot == LetterFeedback::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                *slot = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-letter feedback in guess order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterFeedback] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == LetterFeedback::Correct)
    }

    /// Count the number of Correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&f| f == LetterFeedback::Correct)
            .count()
    }

    /// Count the number of Present letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&f| f == LetterFeedback::Present)
            .count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Correct
    /// - 'Y'/'y'/🟨 for Present
    /// - '-'/'_'/⬜/⬛ for Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let letters = s
            .chars()
            .map(LetterFeedback::from_symbol)
            .collect::<Option<Vec<_>>>()?;

        if letters.is_empty() {
            return None;
        }

        Some(Self(letters))
    }
}

impl From<Vec<LetterFeedback>> for Feedback {
    fn from(letters: Vec<LetterFeedback>) -> Self {
        Self(letters)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::{Absent, Correct, Present};
    use super::*;

    fn feedback(guess: &str, solution: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(solution).unwrap())
    }

    #[test]
    fn precedence_order() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!(Absent.max(Correct), Correct);
    }

    #[test]
    fn all_absent() {
        let fb = feedback("abcde", "fghij");
        assert_eq!(fb.letters(), &[Absent; 5]);
        assert_eq!(fb.count_correct(), 0);
        assert_eq!(fb.count_present(), 0);
    }

    #[test]
    fn solution_against_itself_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "volume", "a"] {
            let fb = feedback(word, word);
            assert!(fb.is_perfect());
            assert_eq!(fb.count_correct(), word.len());
        }
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(feedback("CRANE", "crane"), feedback("crane", "CRANE"));
        assert!(feedback("CrAnE", "cRaNe").is_perfect());
    }

    #[test]
    fn trace_against_crane() {
        // R and A line up, C is misplaced, E lines up, T is absent
        let fb = feedback("trace", "crane");
        assert_eq!(fb.letters(), &[Absent, Correct, Correct, Present, Correct]);
    }

    #[test]
    fn speed_against_erase() {
        // ERASE holds two E's and one S; D and P are absent
        let fb = feedback("speed", "erase");
        assert_eq!(fb.letters(), &[Present, Absent, Present, Present, Absent]);
        assert_eq!(fb.count_present(), 3);
    }

    #[test]
    fn surplus_duplicates_are_absent() {
        // ABIDE holds one E, claimed by the exact match at the end
        let fb = feedback("eerie", "abide");
        assert_eq!(fb.letters(), &[Absent, Absent, Absent, Present, Correct]);

        let fb = feedback("geese", "those");
        assert_eq!(fb.letters(), &[Absent, Absent, Absent, Correct, Correct]);
    }

    #[test]
    fn correct_takes_priority_over_earlier_present() {
        // The only O that LOBBY can credit is the one in position 1
        let fb = feedback("boost", "lobby");
        assert_eq!(fb.letters(), &[Present, Correct, Absent, Absent, Absent]);
    }

    #[test]
    fn duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O misplaced, second O exact
        let fb = feedback("robot", "floor");
        assert_eq!(fb.letters(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn letter_credit_never_exceeds_solution_count() {
        let words = ["speed", "erase", "geese", "eerie", "abide", "lobby", "boost", "llama"];
        for guess in words {
            for solution in words {
                let g = Word::new(guess).unwrap();
                let s = Word::new(solution).unwrap();
                let fb = Feedback::calculate(&g, &s);
                let counts = s.letter_counts();

                for (&letter, &available) in &counts {
                    let credited = g
                        .letters()
                        .iter()
                        .zip(fb.letters())
                        .filter(|&(&l, &f)| l == letter && f != Absent)
                        .count();
                    assert!(
                        credited <= available,
                        "{guess} vs {solution}: '{}' credited {credited} times",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn long_repeated_letters_keep_their_credit() {
        // 256 a's cannot fit a u8 count
        let guess = Word::new(format!("{}b", "a".repeat(256))).unwrap();
        let solution = Word::new(format!("b{}", "a".repeat(256))).unwrap();
        let fb = Feedback::calculate(&guess, &solution);

        assert_eq!(fb.count_correct(), 255);
        assert_eq!(fb.letters()[0], Present);
        assert_eq!(fb.letters()[256], Present);
    }

    #[test]
    fn evaluation_is_idempotent() {
        assert_eq!(feedback("speed", "erase"), feedback("speed", "erase"));
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn mismatched_lengths_panic() {
        let _ = feedback("crane", "cranes");
    }

    #[test]
    fn emoji_round_trip() {
        let fb = feedback("trace", "crane");
        assert_eq!(fb.to_emoji(), "⬜🟩🟩🟨🟩");
        assert_eq!(Feedback::parse(&fb.to_emoji()), Some(fb));
    }

    #[test]
    fn parse_valid() {
        let p1 = Feedback::parse("GYG--").unwrap();
        let p2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Feedback::parse("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.letters(), &[Correct, Present, Correct, Absent, Absent]);
    }

    #[test]
    fn parse_invalid() {
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
        assert!("G?".parse::<Feedback>().is_err());
    }
}
