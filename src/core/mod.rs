//! Core domain types for the game
//!
//! Words and per-letter feedback. Everything here is pure and has no
//! knowledge of game state or presentation.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use word::{Word, WordError};
