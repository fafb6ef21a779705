//! Hangman answer word representation
//!
//! A Word stores a lowercase answer along with letter position indices for
//! reveal processing.

use rustc_hash::FxHashMap;
use std::fmt;

/// An answer word with letter position tracking
///
/// Stores the word as lowercase text and maintains a map of letter positions
/// so a guess can reveal every occurrence in one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("tiger").unwrap();
    /// assert_eq!(word.text(), "tiger");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("t1ger").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.bytes().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= len
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
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
        let word = Word::new("tiger").unwrap();
        assert_eq!(word.text(), "tiger");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("TIGER").unwrap();
        assert_eq!(word.text(), "tiger");

        let word2 = Word::new("TiGeR").unwrap();
        assert_eq!(word2.text(), "tiger");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("wallflower").unwrap().len(), 10);
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("t1ger").is_err()); // Number
        assert!(Word::new("ti ger").is_err()); // Space
        assert!(Word::new("tiger!").is_err()); // Punctuation
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("moon").unwrap();
        assert_eq!(word.char_at(0), b'm');
        assert_eq!(word.char_at(1), b'o');
        assert_eq!(word.char_at(2), b'o');
        assert_eq!(word.char_at(3), b'n');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("moon").unwrap();
        assert!(word.has_letter(b'm'));
        assert!(word.has_letter(b'o'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("moon").unwrap();
        assert_eq!(word.positions_of(b'o'), &[1, 2]); // Both O positions
        assert_eq!(word.positions_of(b'm'), &[0]);
        assert_eq!(word.positions_of(b'z'), &[]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("horse").unwrap();
        assert_eq!(format!("{word}"), "horse");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("moon").unwrap();
        let word2 = Word::new("MOON").unwrap();
        let word3 = Word::new("noon").unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}
