//! Word lists for hangman answers
//!
//! Provides the embedded word list compiled into the binary, a file loader
//! for custom lists, and the [`WordBank`] a session draws from.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{BankError, WordBank};
pub use embedded::{WORDS, WORDS_COUNT};
