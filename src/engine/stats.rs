//! Per-session answer statistics

use crate::core::GuessOutcome;

/// Running tally of guesses for the current session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub attempts: usize,
    pub correct: usize,
    pub wrong: usize,
    pub malformed: usize,
    pub streak: usize,
    pub best_streak: usize,
}

impl SessionStats {
    /// Record the outcome of one submitted guess
    pub fn record(&mut self, outcome: GuessOutcome) {
        self.attempts += 1;
        match outcome {
            GuessOutcome::Correct => {
                self.correct += 1;
                self.streak += 1;
                self.best_streak = self.best_streak.max(self.streak);
            }
            GuessOutcome::Wrong => {
                self.wrong += 1;
                self.streak = 0;
            }
            GuessOutcome::NotANumber => {
                self.malformed += 1;
                self.streak = 0;
            }
        }
    }

    /// Percentage of numeric guesses that were correct
    ///
    /// Malformed input does not count against accuracy. Returns 0 when no
    /// numeric guess has been made.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        let numeric = self.correct + self.wrong;
        if numeric == 0 {
            0.0
        } else {
            self.correct as f64 / numeric as f64 * 100.0
        }
    }
}
