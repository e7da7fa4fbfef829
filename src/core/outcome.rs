//! Result of checking a guess

/// What happened when the player submitted an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    /// Guess matched the target; score advanced and a new round started
    Correct,
    /// Guess was a number but not the target
    Wrong,
    /// Guess could not be read as a base-10 integer
    NotANumber,
}

impl GuessOutcome {
    /// Check if the guess matched the target
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Check if the input text was malformed rather than numerically wrong
    #[inline]
    #[must_use]
    pub const fn is_format_error(self) -> bool {
        matches!(self, Self::NotANumber)
    }
}
