//! Guess application
//!
//! Applies a validated letter to a round: reveals matching positions or
//! charges an attempt, and settles the round on a terminal outcome.

use super::{Round, RoundStatus};
use crate::session::SessionStats;

/// Result of applying one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Round goes on: either a letter was revealed or a miss was recorded
    /// with attempts remaining
    Continue,
    /// The guess completed the word
    Win,
    /// The guess was the final miss
    Loss,
}

impl Outcome {
    /// True for `Win` and `Loss`
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Loss)
    }
}

/// Apply a pre-validated letter to the round
///
/// The letter must have passed [`validate`](super::validate); this function
/// does not re-check it. Every matching answer position is revealed. The
/// win check runs strictly before miss accounting, so a guess that completes
/// the word never costs an attempt. On a terminal outcome the session stats
/// are bumped.
pub fn apply_guess(letter: u8, round: &mut Round, stats: &mut SessionStats) -> Outcome {
    debug_assert!(letter.is_ascii_lowercase());
    debug_assert!(!round.has_guessed(letter));
    debug_assert_eq!(round.status(), RoundStatus::InProgress);

    round.push_guessed(letter);

    let positions = round.answer().positions_of(letter).to_vec();
    let found = !positions.is_empty();
    for position in positions {
        round.reveal(position);
    }

    if round.is_fully_revealed() {
        round.finish(RoundStatus::Won);
        stats.record_win();
        return Outcome::Win;
    }

    if !found && round.spend_attempt() == 0 {
        round.finish(RoundStatus::Lost);
        stats.record_loss();
        return Outcome::Loss;
    }

    Outcome::Continue
}
