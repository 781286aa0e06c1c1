//! Dictionary word representation
//!
//! A Word stores a 5-letter lowercase word as bytes for fast position and membership tests.

use std::fmt;
use thiserror::Error;

/// Number of letters in every dictionary word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter dictionary word
///
/// Immutable once built; the text is always lowercase ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Word;
    ///
    /// let word = Word::new("Stone").unwrap();
    /// assert_eq!(word.text(), "stone");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("st0ne").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("stone").unwrap();
        assert_eq!(word.text(), "stone");
        assert_eq!(word.chars(), b"stone");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("AMBER").unwrap();
        assert_eq!(word.text(), "amber");

        let word2 = Word::new("MaNgO").unwrap();
        assert_eq!(word2.text(), "mango");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("toolong"), Err(WordError::InvalidLength(7)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("ston3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ston "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café!"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("notes").unwrap();
        assert_eq!(word.char_at(0), b'n');
        assert_eq!(word.char_at(2), b't');
        assert_eq!(word.char_at(4), b's');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("apple").unwrap();
        assert!(word.has_letter(b'a'));
        assert!(word.has_letter(b'p'));
        assert!(!word.has_letter(b'm'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("tones").unwrap();
        assert_eq!(format!("{word}"), "tones");
    }
}
