//! In-progress guess

/// Letters typed for the current attempt, bounded by the word length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessBuffer {
    letters: String,
    capacity: usize,
}

impl GuessBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            letters: String::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a letter, lowercased
    ///
    /// Returns `false` (and leaves the buffer alone) when it is already full
    /// or `letter` is not an ASCII letter.
    pub fn push(&mut self, letter: char) -> bool {
        if self.is_full() || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.letters.push(letter.to_ascii_lowercase());
        true
    }

    /// Drop the last letter; returns `false` if there was none
    pub fn pop(&mut self) -> bool {
        self.letters.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_until_full() {
        let mut buffer = GuessBuffer::new(3);
        assert!(buffer.push('a'));
        assert!(buffer.push('B'));
        assert!(buffer.push('c'));
        assert!(buffer.is_full());
        assert!(!buffer.push('d'));
        assert_eq!(buffer.as_str(), "abc");
    }

    #[test]
    fn push_rejects_non_letters() {
        let mut buffer = GuessBuffer::new(5);
        assert!(!buffer.push('1'));
        assert!(!buffer.push(' '));
        assert!(buffer.is_empty());
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut buffer = GuessBuffer::new(5);
        assert!(!buffer.pop());
        buffer.push('x');
        assert!(buffer.pop());
        assert!(buffer.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut buffer = GuessBuffer::new(5);
        buffer.push('a');
        buffer.push('b');
        buffer.clear();
        assert_eq!(buffer.len(), 0);
        assert!(!buffer.is_full());
    }
}
