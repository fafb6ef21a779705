//! Renderer-facing state snapshot
//!
//! The core never touches a display surface; after every transition it hands
//! the renderer an immutable snapshot of what to show.

use crate::core::Outcome;

/// One-shot result of a round that just ended
///
/// Typed rather than pre-rendered text: the front end decides how to word
/// and color it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// `Win` or `Loss`
    pub outcome: Outcome,
    /// The answer of the finished round, for the loss message
    pub answer: String,
}

/// Everything a renderer needs after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Session wins so far
    pub wins: u32,
    /// Session losses so far
    pub losses: u32,
    /// Uppercased reveal pattern, placeholders for unguessed positions
    pub masked: String,
    /// Wrong guesses remaining this round
    pub attempts_left: u8,
    /// Uppercased guessed letters in insertion order
    pub guessed: Vec<char>,
    /// Present for exactly one snapshot after a round ends
    pub result: Option<RoundResult>,
}
