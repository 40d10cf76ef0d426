//! Formatting utilities for terminal output

use super::palette::{Palette, Rgb};
use crate::core::LetterFeedback;
use crate::game::{Attempt, KeyboardState};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A single letter tile: upper-case letter on a coloured background
#[must_use]
pub fn tile(letter: char, background: Rgb, palette: &Palette) -> ColoredString {
    let Rgb(r, g, b) = background;
    let Rgb(tr, tg, tb) = palette.text;
    format!(" {} ", letter.to_ascii_uppercase())
        .truecolor(tr, tg, tb)
        .on_truecolor(r, g, b)
        .bold()
}

/// A submitted guess as a row of coloured tiles
#[must_use]
pub fn attempt_row(attempt: &Attempt, palette: &Palette) -> String {
    attempt
        .word
        .letters()
        .iter()
        .zip(attempt.feedback.letters())
        .map(|(&letter, &fb)| tile(char::from(letter), palette.feedback(fb), palette).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The in-progress guess padded with blank tiles to `word_length`
#[must_use]
pub fn pending_row(buffer: &str, word_length: usize, palette: &Palette) -> String {
    buffer
        .chars()
        .chain(std::iter::repeat(' '))
        .take(word_length)
        .map(|c| tile(c, palette.border, palette).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyboard rows with each key coloured by the best feedback seen for it
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState, palette: &Palette) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| {
                    let Rgb(r, g, b) = palette.key(keyboard.get(c));
                    format!("{}", c.to_ascii_uppercase())
                        .bold()
                        .on_truecolor(r, g, b)
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Plain-text marker for a letter, for terminals without colour
#[must_use]
pub const fn feedback_symbol(feedback: LetterFeedback) -> char {
    match feedback {
        LetterFeedback::Correct => 'G',
        LetterFeedback::Present => 'Y',
        LetterFeedback::Absent => '-',
    }
}
