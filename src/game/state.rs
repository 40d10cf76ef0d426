//! Game state machine
//!
//! A `Game` owns everything that changes during a session. Each classified
//! input is applied to completion before the next one; once the game is won
//! or lost every further input is dropped.

use super::buffer::GuessBuffer;
use super::keyboard::KeyboardState;
use super::snapshot::GameSnapshot;
use super::{ConfigError, GameConfig, GameError};
use crate::core::{Feedback, Word};
use crate::input::{InputAction, KeyPress, classify};
use crate::wordlists::WordSource;
use rand::Rng;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted guess together with its evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub word: Word,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Advisory about a rejected guess; cleared by the next letter typed
    Alert,
    Win,
    Loss,
}

/// Text shown to the player after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Why a guess was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    NotAWord,
}

/// Result of applying one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    /// The in-progress guess gained or lost a letter, or an alert was dismissed
    Edited,
    Rejected(Rejection),
    /// Guess accepted; game continues
    Submitted(Feedback),
    Won(Feedback),
    Lost(Feedback),
}

/// One game session against a word source
#[derive(Debug, Clone)]
pub struct Game<'a, S> {
    source: &'a S,
    config: GameConfig,
    solution: Word,
    attempts: Vec<Attempt>,
    buffer: GuessBuffer,
    keyboard: KeyboardState,
    status: GameStatus,
    message: Option<Message>,
}

impl<'a, S: WordSource> Game<'a, S> {
    /// Start a game with a random solution drawn from `source`
    ///
    /// # Errors
    ///
    /// Returns `GameError` if the configuration is invalid or `source` has no
    /// common word of the configured length.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::game::{Game, GameConfig, GameStatus};
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_slices(&["crane", "slate"], &[]);
    /// let game = Game::new(&dict, GameConfig::default(), &mut StdRng::seed_from_u64(1)).unwrap();
    /// assert_eq!(game.status(), GameStatus::InProgress);
    /// ```
    pub fn new<R: Rng + ?Sized>(
        source: &'a S,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let solution = source.random_word(config.word_length, rng)?;
        Self::with_solution(source, config, solution)
    }

    /// Start a game with a known solution
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if the configuration is invalid or the
    /// solution length does not match it.
    pub fn with_solution(
        source: &'a S,
        config: GameConfig,
        solution: Word,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if solution.len() != config.word_length {
            return Err(ConfigError::SolutionLength {
                expected: config.word_length,
                actual: solution.len(),
            }
            .into());
        }

        tracing::info!(
            word_length = config.word_length,
            max_attempts = config.max_attempts,
            "new game started"
        );
        tracing::trace!(solution = solution.text(), "solution chosen");

        Ok(Self {
            source,
            config,
            solution,
            attempts: Vec::with_capacity(config.max_attempts),
            buffer: GuessBuffer::new(config.word_length),
            keyboard: KeyboardState::new(),
            status: GameStatus::InProgress,
            message: None,
        })
    }

    /// Classify a raw key press and apply it
    pub fn press(&mut self, press: &KeyPress) -> Outcome {
        self.apply(classify(press))
    }

    /// Apply one classified input
    pub fn apply(&mut self, action: InputAction) -> Outcome {
        if self.status.is_terminal() {
            return Outcome::Ignored;
        }

        match action {
            InputAction::Letter(letter) => {
                let cleared = self
                    .message
                    .take_if(|m| m.kind == MessageKind::Alert)
                    .is_some();
                if self.buffer.push(letter) || cleared {
                    Outcome::Edited
                } else {
                    Outcome::Ignored
                }
            }
            InputAction::Backspace => {
                if self.buffer.pop() {
                    Outcome::Edited
                } else {
                    Outcome::Ignored
                }
            }
            InputAction::Enter => self.submit(),
            InputAction::Ignored => Outcome::Ignored,
        }
    }

    /// Apply an input and return the new state with its snapshot
    #[must_use]
    pub fn step(mut self, action: InputAction) -> (Self, GameSnapshot) {
        self.apply(action);
        let snapshot = self.snapshot();
        (self, snapshot)
    }

    fn submit(&mut self) -> Outcome {
        if self.buffer.len() != self.config.word_length {
            return self.reject(Rejection::TooShort, "Too short!".to_string());
        }

        let guess = match Word::new(self.buffer.as_str()) {
            Ok(word) if self.source.is_word(word.text()) => word,
            _ => {
                let text = format!("{} isn't a word!", self.buffer.as_str().to_uppercase());
                return self.reject(Rejection::NotAWord, text);
            }
        };

        let feedback = Feedback::calculate(&guess, &self.solution);
        self.keyboard.record(&guess, &feedback);
        let won = guess == self.solution;
        self.attempts.push(Attempt {
            word: guess,
            feedback: feedback.clone(),
        });
        self.buffer.clear();

        tracing::debug!(
            attempt = self.attempts.len(),
            feedback = %feedback,
            "guess accepted"
        );

        if won {
            self.status = GameStatus::Won;
            self.message = Some(Message::new("You won!", MessageKind::Win));
            tracing::info!(attempts = self.attempts.len(), "game won");
            Outcome::Won(feedback)
        } else if self.attempts.len() >= self.config.max_attempts {
            self.status = GameStatus::Lost;
            self.message = Some(Message::new("You lost!", MessageKind::Loss));
            tracing::info!(attempts = self.attempts.len(), "game lost");
            Outcome::Lost(feedback)
        } else {
            self.message = None;
            Outcome::Submitted(feedback)
        }
    }

    fn reject(&mut self, reason: Rejection, text: String) -> Outcome {
        tracing::debug!(?reason, guess = self.buffer.as_str(), "guess rejected");
        self.message = Some(Message::new(text, MessageKind::Alert));
        Outcome::Rejected(reason)
    }

    /// Read-only view of everything a presentation layer needs
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            word_length: self.config.word_length,
            max_attempts: self.config.max_attempts,
            attempts: self.attempts.clone(),
            buffer: self.buffer.as_str().to_string(),
            keyboard: self.keyboard.clone(),
            status: self.status,
            message: self.message.clone(),
            solution: self
                .status
                .is_terminal()
                .then(|| self.solution.text().to_string()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Letters typed for the current attempt
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &str {
        self.buffer.as_str()
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }
}
