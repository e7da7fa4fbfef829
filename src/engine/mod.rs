//! Quiz engine
//!
//! Round state (width, target, score) and the session tally built on top of it.

mod guess;
mod stats;

pub use guess::{GuessEngine, random_target};
pub use stats::SessionStats;
