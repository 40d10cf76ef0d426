//! Keyboard input handling
//!
//! Normalizes raw key presses into game actions.

mod classifier;

pub use classifier::{InputAction, Key, KeyPress, Modifiers, classify};
