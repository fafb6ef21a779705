//! Round state for a single game of hangman
//!
//! A Round tracks the hidden answer, which positions have been revealed,
//! which letters were guessed, and how many wrong guesses remain.

use super::Word;
use std::fmt;

/// Maximum number of wrong guesses per round
pub const MAX_ATTEMPTS: u8 = 12;

/// Masking symbol for an unrevealed letter position
pub const PLACEHOLDER: char = '_';

/// Progress of a round
///
/// Starts `InProgress` and transitions at most once, to `Won` or `Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    /// True for `Won` and `Lost`
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The mutable record of one round in progress
///
/// Created fresh at round start and replaced wholesale when the next round
/// begins. Mutation goes through [`apply_guess`](super::apply_guess) only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    answer: Word,
    revealed: Vec<bool>,
    guessed: Vec<u8>,
    attempts_left: u8,
    status: RoundStatus,
}

impl Round {
    /// Start a round for the given answer
    ///
    /// All positions masked, no letters guessed, full attempts.
    #[must_use]
    pub fn new(answer: Word) -> Self {
        let revealed = vec![false; answer.len()];
        Self {
            answer,
            revealed,
            guessed: Vec::new(),
            attempts_left: MAX_ATTEMPTS,
            status: RoundStatus::InProgress,
        }
    }

    /// The hidden answer
    #[inline]
    #[must_use]
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    /// Current status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Wrong guesses remaining, in [0, `MAX_ATTEMPTS`]
    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    /// Letters guessed so far, in insertion order
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[u8] {
        &self.guessed
    }

    /// Whether the letter was already guessed this round
    #[inline]
    #[must_use]
    pub fn has_guessed(&self, letter: u8) -> bool {
        self.guessed.contains(&letter)
    }

    /// Whether every position of the answer is revealed
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    /// The reveal pattern: answer letters where guessed, placeholders elsewhere
    ///
    /// Always the same length as the answer.
    #[must_use]
    pub fn masked(&self) -> String {
        self.revealed
            .iter()
            .enumerate()
            .map(|(i, &shown)| {
                if shown {
                    self.answer.char_at(i) as char
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    pub(crate) fn push_guessed(&mut self, letter: u8) {
        debug_assert!(!self.guessed.contains(&letter));
        self.guessed.push(letter);
    }

    /// Reveals never retract: positions only flip false -> true.
    pub(crate) fn reveal(&mut self, position: usize) {
        self.revealed[position] = true;
    }

    /// Spend one attempt, saturating at zero. Returns the new count.
    pub(crate) fn spend_attempt(&mut self) -> u8 {
        self.attempts_left = self.attempts_left.saturating_sub(1);
        self.attempts_left
    }

    /// Single terminal transition: only valid from `InProgress`.
    pub(crate) fn finish(&mut self, status: RoundStatus) {
        debug_assert_eq!(self.status, RoundStatus::InProgress);
        debug_assert!(status.is_terminal());
        self.status = status;
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} attempts left)", self.masked(), self.attempts_left)
    }
}
