//! Session configuration
//!
//! Built from the global command-line flags.

use crate::core::{BitWidth, EngineError};
use crate::engine::GuessEngine;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings shared by every command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizConfig {
    pub bits: BitWidth,
    pub seed: Option<u64>,
}

impl QuizConfig {
    /// Validate raw flag values
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfiguration` if `bits` is outside `4..=10`.
    pub fn new(bits: u8, seed: Option<u64>) -> Result<Self, EngineError> {
        Ok(Self {
            bits: BitWidth::new(bits)?,
            seed,
        })
    }

    /// Random generator: reproducible when a seed was given
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Generator for one of several independent streams, e.g. one per width
    ///
    /// Streams derived from the same seed are stable across runs.
    #[must_use]
    pub fn stream_rng(&self, stream: u64) -> StdRng {
        self.seed.map_or_else(StdRng::from_os_rng, |seed| {
            StdRng::seed_from_u64(seed.wrapping_add(stream))
        })
    }

    /// Engine for a new session
    #[must_use]
    pub fn engine(&self) -> GuessEngine {
        GuessEngine::with_rng(self.bits, self.rng())
    }
}
