//! Cross-round win/loss counters

/// Running totals for the current session
///
/// Outlives individual rounds; bumped only by
/// [`apply_guess`](crate::core::apply_guess) on terminal outcomes and zeroed
/// only by an explicit session reset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    wins: u32,
    losses: u32,
}

impl SessionStats {
    /// Rounds won this session
    #[inline]
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Rounds lost this session
    #[inline]
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    /// Rounds finished this session
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.wins + self.losses
    }

    pub(crate) fn record_win(&mut self) {
        self.wins += 1;
    }

    pub(crate) fn record_loss(&mut self) {
        self.losses += 1;
    }

    /// Zero both counters (session reset)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
