//! Read-only view of a game for presentation layers

use super::keyboard::KeyboardState;
use super::state::{Attempt, GameStatus, Message};
use std::fmt::Write;

/// Everything needed to redraw the game without touching it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub word_length: usize,
    pub max_attempts: usize,
    pub attempts: Vec<Attempt>,
    /// Letters typed for the current attempt
    pub buffer: String,
    pub keyboard: KeyboardState,
    pub status: GameStatus,
    pub message: Option<Message>,
    /// Only revealed once the game is over
    pub solution: Option<String>,
}

impl GameSnapshot {
    /// Row the next guess will occupy, or `None` once the game is over
    #[must_use]
    pub fn current_row(&self) -> Option<usize> {
        (!self.status.is_terminal() && self.attempts.len() < self.max_attempts)
            .then_some(self.attempts.len())
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts.len())
    }

    /// Spoiler-free summary of the game as an emoji grid
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Game, GameConfig};
    /// use wordle_game::input::InputAction;
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_slices(&["crane"], &["trace"]);
    /// let mut game = Game::with_solution(&dict, GameConfig::default(), Word::new("crane").unwrap()).unwrap();
    /// for word in ["trace", "crane"] {
    ///     for c in word.chars() {
    ///         game.apply(InputAction::Letter(c));
    ///     }
    ///     game.apply(InputAction::Enter);
    /// }
    ///
    /// assert_eq!(game.snapshot().share_text(), "Wordle 2/6\n\n⬜🟩🟩🟨🟩\n🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn share_text(&self) -> String {
        let score = match self.status {
            GameStatus::Won => self.attempts.len().to_string(),
            GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
        };

        let mut text = format!("Wordle {score}/{}\n", self.max_attempts);
        for attempt in &self.attempts {
            let _ = write!(text, "\n{}", attempt.feedback.to_emoji());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, LetterFeedback, Word};

    fn snapshot(status: GameStatus, guesses: &[&str]) -> GameSnapshot {
        let attempts = guesses
            .iter()
            .map(|&g| Attempt {
                word: Word::new(g).unwrap(),
                feedback: Feedback::from(vec![LetterFeedback::Absent; g.len()]),
            })
            .collect();

        GameSnapshot {
            word_length: 5,
            max_attempts: 6,
            attempts,
            buffer: String::new(),
            keyboard: KeyboardState::new(),
            status,
            message: None,
            solution: None,
        }
    }

    #[test]
    fn current_row_tracks_attempts() {
        assert_eq!(snapshot(GameStatus::InProgress, &[]).current_row(), Some(0));
        assert_eq!(
            snapshot(GameStatus::InProgress, &["trace", "pilot"]).current_row(),
            Some(2)
        );
        assert_eq!(snapshot(GameStatus::Won, &["crane"]).current_row(), None);
    }

    #[test]
    fn attempts_remaining_counts_down() {
        assert_eq!(snapshot(GameStatus::InProgress, &[]).attempts_remaining(), 6);
        assert_eq!(
            snapshot(GameStatus::InProgress, &["trace", "pilot"]).attempts_remaining(),
            4
        );
    }

    #[test]
    fn share_text_for_loss_uses_x() {
        let snap = snapshot(GameStatus::Lost, &["aaaaa", "bbbbb"]);
        assert_eq!(snap.share_text(), "Wordle X/6\n\n⬜⬜⬜⬜⬜\n⬜⬜⬜⬜⬜");
    }

    #[test]
    fn share_text_never_contains_letters() {
        let snap = snapshot(GameStatus::Lost, &["trace"]);
        assert!(!snap.share_text().to_lowercase().contains("trace"));
    }
}
