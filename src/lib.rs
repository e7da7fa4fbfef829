//! Binary Quiz
//!
//! A quiz that shows a random number in binary and asks for its decimal value.
//!
//! # Quick Start
//!
//! ```rust
//! use binary_quiz::core::{BitWidth, GuessOutcome};
//! use binary_quiz::engine::GuessEngine;
//!
//! let mut engine = GuessEngine::seeded(BitWidth::new(5).unwrap(), 42);
//! println!("What is {} in decimal?", engine.binary());
//!
//! let answer = engine.target().to_string();
//! assert_eq!(engine.check_guess(&answer), GuessOutcome::Correct);
//! assert_eq!(engine.score(), 1);
//! ```

// Core domain types
pub mod core;

// Round state and scoring
pub mod engine;

// Session settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
