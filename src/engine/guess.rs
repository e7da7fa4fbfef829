//! Main quiz engine

use crate::core::{BitWidth, EngineError, GuessOutcome, MIN_TARGET, pad_binary};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

/// Draw a target uniformly from `3..=2^(bits-1) - 1`
pub fn random_target<R: Rng>(rng: &mut R, width: BitWidth) -> u32 {
    rng.random_range(width.target_range())
}

/// Guess engine
///
/// Owns the round state: bit width, current target and score. Randomness is
/// injected so that seeded generators give reproducible target sequences.
/// Construction starts the first round, so an engine always has a target.
pub struct GuessEngine<R = StdRng> {
    rng: R,
    width: BitWidth,
    target: u32,
    score: u32,
}

impl GuessEngine<StdRng> {
    /// Create an engine whose targets are reproducible from `seed`
    #[must_use]
    pub fn seeded(width: BitWidth, seed: u64) -> Self {
        Self::with_rng(width, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GuessEngine<R> {
    /// Create an engine with the given generator and start the first round
    ///
    /// # Examples
    /// ```
    /// use binary_quiz::core::BitWidth;
    /// use binary_quiz::engine::GuessEngine;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let engine = GuessEngine::with_rng(BitWidth::new(5).unwrap(), StdRng::seed_from_u64(7));
    /// assert!((3..=15).contains(&engine.target()));
    /// assert_eq!(engine.score(), 0);
    /// ```
    pub fn with_rng(width: BitWidth, rng: R) -> Self {
        let mut engine = Self {
            rng,
            width,
            target: MIN_TARGET,
            score: 0,
        };
        engine.new_round();
        engine
    }

    /// Change the bit width and start a new round
    ///
    /// The score is kept. A fresh target is always drawn so the displayed
    /// binary string fits the new width.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfiguration` if `bits` is outside
    /// `4..=10`. The engine is left untouched in that case.
    pub fn configure(&mut self, bits: u8) -> Result<(), EngineError> {
        let width = BitWidth::new(bits).inspect_err(|e| warn!(bits, "rejected bit width: {e}"))?;
        self.set_width(width);
        Ok(())
    }

    /// Typed form of [`configure`](Self::configure) for already validated widths
    pub fn set_width(&mut self, width: BitWidth) {
        info!(from = self.width.get(), to = width.get(), "bit width changed");
        self.width = width;
        self.new_round();
    }

    /// Draw a new target for the current width
    ///
    /// Leaves the score unchanged. Returns the new target.
    pub fn new_round(&mut self) -> u32 {
        self.target = random_target(&mut self.rng, self.width);
        debug!(bits = self.width.get(), target = self.target, "new round");
        self.target
    }

    /// Check a guess typed by the player
    ///
    /// The text is trimmed and parsed as a base-10 integer. Unparsable text
    /// is reported as `NotANumber` rather than an error. A match increments
    /// the score and starts a new round; a mismatch changes nothing.
    ///
    /// # Examples
    /// ```
    /// use binary_quiz::core::{BitWidth, GuessOutcome};
    /// use binary_quiz::engine::GuessEngine;
    ///
    /// let mut engine = GuessEngine::seeded(BitWidth::DEFAULT, 1);
    /// assert_eq!(engine.check_guess("abc"), GuessOutcome::NotANumber);
    ///
    /// let answer = engine.target().to_string();
    /// assert_eq!(engine.check_guess(&answer), GuessOutcome::Correct);
    /// assert_eq!(engine.score(), 1);
    /// ```
    pub fn check_guess(&mut self, input: &str) -> GuessOutcome {
        let Ok(guess) = input.trim().parse::<i64>() else {
            debug!(input, "guess is not a number");
            return GuessOutcome::NotANumber;
        };

        if guess != i64::from(self.target) {
            debug!(guess, "wrong guess");
            return GuessOutcome::Wrong;
        }

        self.score += 1;
        debug!(score = self.score, "correct guess");
        self.new_round();
        GuessOutcome::Correct
    }

    /// Current target in decimal
    #[inline]
    #[must_use]
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// Number of correct guesses this session
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Selected bit width
    #[inline]
    #[must_use]
    pub const fn bit_width(&self) -> BitWidth {
        self.width
    }

    /// Inclusive range targets are drawn from at the current width
    #[must_use]
    pub const fn range(&self) -> RangeInclusive<u32> {
        self.width.target_range()
    }

    /// Current target formatted as a zero-padded binary string
    #[must_use]
    pub fn binary(&self) -> String {
        pad_binary(u64::from(self.target), self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_binary;

    fn engine(bits: u8) -> GuessEngine {
        GuessEngine::seeded(BitWidth::new(bits).unwrap(), 42)
    }

    #[test]
    fn new_engine_starts_round() {
        let e = engine(5);
        assert!(e.range().contains(&e.target()));
        assert_eq!(e.score(), 0);
        assert_eq!(e.bit_width().get(), 5);
    }

    #[test]
    fn width_five_formats_nine() {
        let mut e = engine(5);
        assert_eq!(e.range(), 3..=15);
        e.target = 9;
        assert_eq!(e.binary(), "01001");
    }

    #[test]
    fn correct_guess_scores_and_advances() {
        let mut e = engine(5);
        e.target = 9;

        assert_eq!(e.check_guess("9"), GuessOutcome::Correct);
        assert_eq!(e.score(), 1);
        assert!(e.range().contains(&e.target()));
    }

    #[test]
    fn malformed_guess_sets_format_flag() {
        let mut e = engine(5);
        let target = e.target();

        let outcome = e.check_guess("abc");
        assert!(outcome.is_format_error());
        assert!(!outcome.is_correct());
        assert_eq!(e.score(), 0);
        assert_eq!(e.target(), target);
    }

    #[test]
    fn numeric_mismatch_is_not_format_error() {
        let mut e = engine(5);
        e.target = 9;

        let outcome = e.check_guess("8");
        assert_eq!(outcome, GuessOutcome::Wrong);
        assert!(!outcome.is_format_error());
        assert_eq!(e.score(), 0);
        assert_eq!(e.target(), 9);
    }

    #[test]
    fn unparsable_inputs_are_not_a_number() {
        let mut e = engine(6);
        for input in ["", "   ", "1.0", "0x9", "nine", "99999999999999999999999"] {
            assert_eq!(e.check_guess(input), GuessOutcome::NotANumber, "{input:?}");
        }
        assert_eq!(e.score(), 0);
    }

    #[test]
    fn negative_guess_is_wrong_not_malformed() {
        let mut e = engine(5);
        assert_eq!(e.check_guess("-3"), GuessOutcome::Wrong);
    }

    #[test]
    fn guess_whitespace_is_ignored() {
        let mut e = engine(5);
        e.target = 12;
        assert_eq!(e.check_guess(" 12\n"), GuessOutcome::Correct);
    }

    #[test]
    fn repeated_wrong_guesses_keep_score() {
        let mut e = engine(7);
        e.target = 40;
        e.score = 3;
        for _ in 0..10 {
            assert_eq!(e.check_guess("41"), GuessOutcome::Wrong);
        }
        assert_eq!(e.score(), 3);
    }

    #[test]
    fn configure_four_bounds_targets() {
        let mut e = engine(8);
        e.configure(4).unwrap();
        for _ in 0..100 {
            let target = e.new_round();
            assert!((3..=7).contains(&target), "target {target} out of range");
        }
    }

    #[test]
    fn configure_rejects_out_of_range() {
        let mut e = engine(5);
        let target = e.target();

        assert_eq!(e.configure(3), Err(EngineError::InvalidConfiguration(3)));
        assert_eq!(e.configure(11), Err(EngineError::InvalidConfiguration(11)));
        assert_eq!(e.bit_width().get(), 5);
        assert_eq!(e.target(), target);
    }

    #[test]
    fn configure_keeps_score_and_fits_width() {
        let mut e = engine(10);
        e.target = 500;
        e.score = 2;

        e.configure(4).unwrap();
        assert_eq!(e.score(), 2);
        assert!((3..=7).contains(&e.target()));
        assert_eq!(e.binary().len(), 4);
    }

    #[test]
    fn binary_round_trips_target() {
        for width in BitWidth::all() {
            let mut e = GuessEngine::seeded(width, 9);
            for _ in 0..20 {
                e.new_round();
                let digits = e.binary();
                assert!(digits.len() >= usize::from(width.get()));
                assert_eq!(parse_binary(&digits), Some(u64::from(e.target())));
            }
        }
    }

    #[test]
    fn same_seed_same_targets() {
        let mut a = engine(9);
        let mut b = engine(9);
        let seq_a: Vec<u32> = (0..16).map(|_| a.new_round()).collect();
        let seq_b: Vec<u32> = (0..16).map(|_| b.new_round()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn every_target_reachable_at_four_bits() {
        let mut e = engine(4);
        let mut seen = [false; 8];
        for _ in 0..500 {
            seen[e.new_round() as usize] = true;
        }
        assert_eq!(seen, [false, false, false, true, true, true, true, true]);
    }
}
