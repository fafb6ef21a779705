//! Guess validation
//!
//! Pure check that a proposed letter is legal against the current round.
//! Runs strictly before [`apply_guess`](super::apply_guess), which assumes a
//! pre-validated letter.

use super::Round;
use std::fmt;

/// Why a guess was rejected
///
/// Both variants carry the offending character; the input boundary renders
/// them to text for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Input outside a-z
    NotALetter(char),
    /// Letter already submitted this round
    AlreadyGuessed(char),
}

impl GuessError {
    /// The character that was rejected
    #[inline]
    #[must_use]
    pub const fn offending(self) -> char {
        match self {
            Self::NotALetter(ch) | Self::AlreadyGuessed(ch) => ch,
        }
    }
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotALetter(ch) => {
                write!(f, "Invalid guess '{ch}': type a letter of the alphabet")
            }
            Self::AlreadyGuessed(ch) => {
                write!(f, "Invalid guess '{ch}': you have already guessed that letter")
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// Check whether `ch` is a legal guess for `round`
///
/// Succeeds only for a lowercase ASCII letter not yet guessed this round,
/// returning it as a byte for the processor. Read-only; callers case-fold
/// before calling.
///
/// # Errors
/// `NotALetter` for anything outside a-z, `AlreadyGuessed` for a repeat.
pub fn validate(ch: char, round: &Round) -> Result<u8, GuessError> {
    if !ch.is_ascii_lowercase() {
        return Err(GuessError::NotALetter(ch));
    }

    let letter = ch as u8;
    if round.has_guessed(letter) {
        return Err(GuessError::AlreadyGuessed(ch));
    }

    Ok(letter)
}
