//! Game dimensions

use std::fmt;

/// Default number of letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of attempts per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Word length and attempt limit for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
        }
    }

    /// Check the dimensions can describe a playable game
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either dimension is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

/// Invalid game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWordLength,
    ZeroAttempts,
    /// A fixed solution does not match the configured word length
    SolutionLength { expected: usize, actual: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLength => write!(f, "Word length must be at least 1"),
            Self::ZeroAttempts => write!(f, "Number of attempts must be at least 1"),
            Self::SolutionLength { expected, actual } => write!(
                f,
                "Solution must be {expected} letters long, got {actual}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
