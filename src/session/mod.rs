//! Session orchestration
//!
//! A [`Session`] owns the live round, the cross-round statistics, and the
//! word bank, and drives the round lifecycle: validate a guess, apply it,
//! and on a terminal outcome immediately start the next round. Only the
//! one-shot [`RoundResult`] crosses into the new round, surviving for a
//! single snapshot cycle.

mod snapshot;
mod stats;

pub use snapshot::{RoundResult, Snapshot};
pub use stats::SessionStats;

use crate::core::{GuessError, Outcome, Round, apply_guess, validate};
use crate::wordlists::WordBank;
use rand::Rng;

/// A running game session: round after round, stats accumulating
///
/// The random source is injected so tests (and `--seed`) can make word
/// selection deterministic.
pub struct Session<R: Rng> {
    bank: WordBank,
    rng: R,
    stats: SessionStats,
    round: Round,
    last_round: Option<Round>,
    pending_result: Option<RoundResult>,
}

impl<R: Rng> Session<R> {
    /// Start a session: zeroed stats and a first round drawn from the bank
    #[must_use]
    pub fn new(bank: WordBank, mut rng: R) -> Self {
        let answer = bank.pick(&mut rng).clone();
        Self {
            bank,
            rng,
            stats: SessionStats::default(),
            round: Round::new(answer),
            last_round: None,
            pending_result: None,
        }
    }

    /// Replace the live round with a fresh one; stats are untouched
    pub fn start_round(&mut self) {
        let answer = self.bank.pick(&mut self.rng).clone();
        self.round = Round::new(answer);
    }

    /// Full reset: zero the stats, drop any pending result, start a round
    pub fn start_session(&mut self) {
        self.stats.reset();
        self.pending_result = None;
        self.last_round = None;
        self.start_round();
    }

    /// Submit one character as a guess
    ///
    /// Case-folds, validates, applies. On a terminal outcome the finished
    /// round is stashed for [`Self::last_round`], its result queued for the
    /// next snapshot, and the next round starts immediately.
    ///
    /// # Errors
    /// [`GuessError`] if the character is not a letter or was already
    /// guessed this round. The round and stats are untouched on error.
    pub fn guess(&mut self, ch: char) -> Result<Outcome, GuessError> {
        let ch = ch.to_ascii_lowercase();
        let letter = validate(ch, &self.round)?;
        let outcome = apply_guess(letter, &mut self.round, &mut self.stats);

        if outcome.is_terminal() {
            self.pending_result = Some(RoundResult {
                outcome,
                answer: self.round.answer().text().to_string(),
            });

            let answer = self.bank.pick(&mut self.rng).clone();
            let finished = std::mem::replace(&mut self.round, Round::new(answer));
            self.last_round = Some(finished);
        }

        Ok(outcome)
    }

    /// Snapshot for the renderer
    ///
    /// The round result, if one is pending, is consumed here: it appears in
    /// exactly one snapshot.
    pub fn snapshot(&mut self) -> Snapshot {
        Snapshot {
            wins: self.stats.wins(),
            losses: self.stats.losses(),
            masked: self.round.masked().to_uppercase(),
            attempts_left: self.round.attempts_left(),
            guessed: self
                .round
                .guessed()
                .iter()
                .map(|&b| (b as char).to_ascii_uppercase())
                .collect(),
            result: self.pending_result.take(),
        }
    }

    /// The round currently in progress
    #[inline]
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Session statistics
    #[inline]
    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// The most recently finished round, kept for a post-game summary
    #[inline]
    #[must_use]
    pub fn last_round(&self) -> Option<&Round> {
        self.last_round.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_ATTEMPTS, RoundStatus, Word};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Single-word bank makes every round's answer known
    fn fixed_session(answer: &str) -> Session<StdRng> {
        let bank = WordBank::new(vec![Word::new(answer).unwrap()]).unwrap();
        Session::new(bank, StdRng::seed_from_u64(7))
    }

    #[test]
    fn seeded_sessions_pick_the_same_answers() {
        let words: Vec<Word> = ["moon", "tiger", "horse", "yellow"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();

        let mut a = Session::new(WordBank::new(words.clone()).unwrap(), StdRng::seed_from_u64(42));
        let mut b = Session::new(WordBank::new(words).unwrap(), StdRng::seed_from_u64(42));

        for _ in 0..10 {
            assert_eq!(a.round().answer(), b.round().answer());
            a.start_round();
            b.start_round();
        }
    }

    #[test]
    fn win_updates_stats_and_restarts() {
        let mut session = fixed_session("moon");

        assert_eq!(session.guess('m'), Ok(Outcome::Continue));
        assert_eq!(session.guess('o'), Ok(Outcome::Continue));
        assert_eq!(session.guess('n'), Ok(Outcome::Win));

        // Stats persist into the auto-started next round
        assert_eq!(session.stats().wins(), 1);
        assert_eq!(session.round().status(), RoundStatus::InProgress);
        assert!(session.round().guessed().is_empty());
        assert_eq!(session.round().attempts_left(), MAX_ATTEMPTS);

        // The finished round stays retrievable
        let finished = session.last_round().unwrap();
        assert_eq!(finished.status(), RoundStatus::Won);
        assert_eq!(finished.masked(), "moon");
    }

    #[test]
    fn loss_updates_stats_and_restarts() {
        let mut session = fixed_session("cat");

        for ch in "xyzqwerioupd".chars() {
            session.guess(ch).unwrap();
        }

        assert_eq!(session.stats().losses(), 1);
        assert_eq!(session.round().status(), RoundStatus::InProgress);

        // Terminal record preserves the exhausted attempts and empty pattern
        let finished = session.last_round().unwrap();
        assert_eq!(finished.status(), RoundStatus::Lost);
        assert_eq!(finished.attempts_left(), 0);
        assert_eq!(finished.masked(), "___");
    }

    #[test]
    fn result_appears_in_exactly_one_snapshot() {
        let mut session = fixed_session("moon");
        for ch in "mon".chars() {
            session.guess(ch).unwrap();
        }

        let first = session.snapshot();
        let result = first.result.expect("win result should be pending");
        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(result.answer, "moon");

        let second = session.snapshot();
        assert_eq!(second.result, None);
    }

    #[test]
    fn snapshot_reflects_round_and_stats() {
        let mut session = fixed_session("moon");
        session.guess('o').unwrap();
        session.guess('z').unwrap();

        let snap = session.snapshot();
        assert_eq!(snap.masked, "_OO_");
        assert_eq!(snap.attempts_left, MAX_ATTEMPTS - 1);
        assert_eq!(snap.guessed, vec!['O', 'Z']);
        assert_eq!(snap.wins, 0);
        assert_eq!(snap.losses, 0);
        assert_eq!(snap.result, None);
    }

    #[test]
    fn guess_case_folds_input() {
        let mut session = fixed_session("moon");
        assert_eq!(session.guess('M'), Ok(Outcome::Continue));
        assert_eq!(session.round().masked(), "m___");
        // Same letter again, either case, is a repeat
        assert_eq!(session.guess('m'), Err(GuessError::AlreadyGuessed('m')));
    }

    #[test]
    fn rejected_guess_leaves_state_untouched() {
        let mut session = fixed_session("moon");
        session.guess('m').unwrap();

        assert!(session.guess('5').is_err());
        assert!(session.guess('m').is_err());

        assert_eq!(session.round().guessed(), b"m");
        assert_eq!(session.round().attempts_left(), MAX_ATTEMPTS);
        assert_eq!(session.stats().total(), 0);
    }

    #[test]
    fn stats_persist_across_rounds_until_session_reset() {
        let mut session = fixed_session("moon");

        // Win two rounds back to back
        for _ in 0..2 {
            for ch in "mon".chars() {
                session.guess(ch).unwrap();
            }
        }
        assert_eq!(session.stats().wins(), 2);

        // start_round keeps stats, start_session zeroes them
        session.start_round();
        assert_eq!(session.stats().wins(), 2);

        session.start_session();
        assert_eq!(session.stats().wins(), 0);
        assert_eq!(session.last_round(), None);
        assert_eq!(session.snapshot().result, None);
    }
}
