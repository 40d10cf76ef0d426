//! Colour palettes shared by the TUI and line-mode output

use crate::core::LetterFeedback;
use crate::game::MessageKind;

/// A 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub correct: Rgb,
    pub present: Rgb,
    pub absent: Rgb,
    /// Keyboard keys with no feedback yet
    pub unused_key: Rgb,
    /// Board background
    pub empty: Rgb,
    /// Tiles not yet filled in
    pub border: Rgb,
    pub text: Rgb,
    pub alert: Rgb,
    pub win: Rgb,
    pub loss: Rgb,
}

impl Palette {
    pub const STANDARD: Self = Self {
        correct: Rgb(0x61, 0x8C, 0x55),
        present: Rgb(0xB1, 0xA0, 0x4C),
        absent: Rgb(0x3A, 0x3A, 0x3C),
        unused_key: Rgb(0x81, 0x83, 0x84),
        empty: Rgb(0x12, 0x12, 0x13),
        border: Rgb(0x3A, 0x3A, 0x3C),
        text: Rgb(0xFF, 0xFF, 0xFF),
        alert: Rgb(0xB0, 0x50, 0x50),
        win: Rgb(0x61, 0x8C, 0x55),
        loss: Rgb(0xB0, 0x50, 0x50),
    };

    /// Red/green colour-blind friendly variant
    pub const HIGH_CONTRAST: Self = Self {
        correct: Rgb(0xE3, 0x7E, 0x43),
        present: Rgb(0x94, 0xC1, 0xF6),
        win: Rgb(0x94, 0xC1, 0xF6),
        ..Self::STANDARD
    };

    #[must_use]
    pub const fn new(high_contrast: bool) -> Self {
        if high_contrast {
            Self::HIGH_CONTRAST
        } else {
            Self::STANDARD
        }
    }

    /// Tile background for a letter
    #[must_use]
    pub const fn feedback(&self, feedback: LetterFeedback) -> Rgb {
        match feedback {
            LetterFeedback::Correct => self.correct,
            LetterFeedback::Present => self.present,
            LetterFeedback::Absent => self.absent,
        }
    }

    /// Keyboard key background, given the best feedback seen for it
    #[must_use]
    pub const fn key(&self, feedback: Option<LetterFeedback>) -> Rgb {
        match feedback {
            Some(fb) => self.feedback(fb),
            None => self.unused_key,
        }
    }

    #[must_use]
    pub const fn message(&self, kind: MessageKind) -> Rgb {
        match kind {
            MessageKind::Alert => self.alert,
            MessageKind::Win => self.win,
            MessageKind::Loss => self.loss,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::STANDARD
    }
}
