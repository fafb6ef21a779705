//! Core domain types for hangman
//!
//! The round state machine: answer words, the per-round record, guess
//! validation, and guess application. Everything here is pure and testable;
//! presentation and input wiring live elsewhere.

mod guess;
mod round;
mod validate;
mod word;

pub use guess::{Outcome, apply_guess};
pub use round::{MAX_ATTEMPTS, PLACEHOLDER, Round, RoundStatus};
pub use validate::{GuessError, validate};
pub use word::{Word, WordError};
