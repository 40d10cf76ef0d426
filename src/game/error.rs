use super::ConfigError;
use crate::wordlists::WordSourceError;
use std::fmt;

/// Failure to start a game
///
/// Both cases are configuration problems; there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Config(ConfigError),
    WordSource(WordSourceError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Invalid game configuration: {e}"),
            Self::WordSource(e) => write!(f, "Cannot choose a solution: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::WordSource(e) => Some(e),
        }
    }
}

impl From<ConfigError> for GameError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<WordSourceError> for GameError {
    fn from(e: WordSourceError) -> Self {
        Self::WordSource(e)
    }
}
