//! Terminal output formatting
//!
//! Colours, tile formatting and pretty-printing for line mode and commands.

pub mod display;
pub mod formatters;
pub mod palette;

pub use display::{print_board, print_check_result, print_keyboard, print_message, print_summary};
pub use palette::{Palette, Rgb};
