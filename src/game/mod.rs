//! Game engine
//!
//! Guess buffer, keyboard feedback aggregation and the state machine that
//! ties them together. The engine is synchronous and owns no global state;
//! presentation layers drive it with classified input and read snapshots.

mod buffer;
mod config;
mod error;
mod keyboard;
mod snapshot;
mod state;

pub use buffer::GuessBuffer;
pub use config::{ConfigError, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig};
pub use error::GameError;
pub use keyboard::KeyboardState;
pub use snapshot::GameSnapshot;
pub use state::{Attempt, Game, GameStatus, Message, MessageKind, Outcome, Rejection};
