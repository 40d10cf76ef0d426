//! Wordle Game
//!
//! A terminal Wordle with a synchronous, fully testable game engine.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Game, GameConfig, GameStatus, Outcome};
//! use wordle_game::input::{classify, KeyPress, Key};
//! use wordle_game::wordlists::Dictionary;
//!
//! let dict = Dictionary::from_slices(&["crane", "slate"], &["trace"]);
//! let mut game = Game::with_solution(&dict, GameConfig::default(), Word::new("crane").unwrap()).unwrap();
//!
//! for c in "crane".chars() {
//!     game.apply(classify(&KeyPress::char(c)));
//! }
//! let outcome = game.apply(classify(&KeyPress::plain(Key::Enter)));
//!
//! assert!(matches!(outcome, Outcome::Won(_)));
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Key press classification
pub mod input;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
