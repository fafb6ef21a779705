//! The word bank a session draws answers from

use super::{WORDS, loader::words_from_slice};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Immutable, non-empty collection of candidate answer words
///
/// Non-emptiness is checked at construction, so [`WordBank::pick`] never
/// fails. Picks are uniform with replacement; there is no exhaustion.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
}

/// Error type for invalid word banks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankError {
    /// No valid words to draw from
    Empty,
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word bank must contain at least one word"),
        }
    }
}

impl std::error::Error for BankError {}

impl WordBank {
    /// Build a bank from a list of words
    ///
    /// # Errors
    /// `BankError::Empty` if the list is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, BankError> {
        if words.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { words })
    }

    /// The built-in bank shipped with the binary
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(words_from_slice(WORDS)).expect("embedded word list is non-empty")
    }

    /// Pick one word uniformly at random, with replacement
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.words
            .choose(rng)
            .expect("bank is non-empty by construction")
    }

    /// Number of candidate words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All candidate words
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
