//! Hangman
//!
//! A single-player word-guessing game for the terminal: the computer picks a
//! hidden word, you guess letters one at a time, and wins and losses
//! accumulate across rounds until you reset the session.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Round, Word, apply_guess, validate};
//! use hangman::session::SessionStats;
//!
//! let mut round = Round::new(Word::new("moon").unwrap());
//! let mut stats = SessionStats::default();
//!
//! let letter = validate('o', &round).unwrap();
//! apply_guess(letter, &mut round, &mut stats);
//! assert_eq!(round.masked(), "_oo_");
//! ```

// Core domain types
pub mod core;

// Session lifecycle and statistics
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
