//! Core domain types for the binary quiz
//!
//! Pure types and functions with no rendering or randomness: bit widths,
//! binary formatting and guess outcomes.

mod binary;
mod error;
mod outcome;
mod width;

pub(crate) use binary::pad_binary;
pub use binary::{format_binary, format_binary_text, group_bits, parse_binary};
pub use error::EngineError;
pub use outcome::GuessOutcome;
pub use width::{BitWidth, MIN_TARGET};
