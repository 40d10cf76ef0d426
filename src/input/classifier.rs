//! Raw key press classification
//!
//! Physical keyboard events and on-screen key clicks are both described as a
//! `KeyPress` and reduced to an `InputAction` here, so the game never sees
//! terminal-specific event types.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Identity of a pressed key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    /// Anything else: arrows, function keys, escape, ...
    Other,
}

/// Modifier flags that turn a key press into a shortcut
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        alt: false,
        ctrl: false,
        meta: false,
    };

    #[inline]
    #[must_use]
    pub const fn any(self) -> bool {
        self.alt || self.ctrl || self.meta
    }
}

/// A raw key press: which key, and which modifiers were held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    #[must_use]
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Unmodified press of `key`
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Unmodified press of a character key
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::plain(Key::Char(c))
    }
}

impl From<KeyEvent> for KeyPress {
    fn from(event: KeyEvent) -> Self {
        let key = match event.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            _ => Key::Other,
        };

        // Shift is deliberately not a modifier here: it only changes letter case
        let modifiers = Modifiers {
            alt: event.modifiers.contains(KeyModifiers::ALT),
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            meta: event
                .modifiers
                .intersects(KeyModifiers::SUPER | KeyModifiers::META),
        };

        Self { key, modifiers }
    }
}

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// A single lowercase ASCII letter
    Letter(char),
    Enter,
    Backspace,
    Ignored,
}

/// Classify a raw key press
///
/// Any alt/ctrl/meta modifier yields `Ignored`, whatever the key, so OS and
/// terminal shortcuts never edit the guess.
///
/// # Examples
/// ```
/// use wordle_game::input::{classify, InputAction, Key, KeyPress, Modifiers};
///
/// assert_eq!(classify(&KeyPress::char('Q')), InputAction::Letter('q'));
/// assert_eq!(classify(&KeyPress::plain(Key::Delete)), InputAction::Backspace);
///
/// let ctrl = Modifiers { ctrl: true, ..Modifiers::NONE };
/// assert_eq!(classify(&KeyPress::new(Key::Char('a'), ctrl)), InputAction::Ignored);
/// ```
#[must_use]
pub fn classify(press: &KeyPress) -> InputAction {
    if press.modifiers.any() {
        return InputAction::Ignored;
    }

    match press.key {
        Key::Char(c) if c.is_ascii_alphabetic() => InputAction::Letter(c.to_ascii_lowercase()),
        Key::Enter => InputAction::Enter,
        Key::Backspace | Key::Delete => InputAction::Backspace,
        Key::Char(_) | Key::Other => InputAction::Ignored,
    }
}
