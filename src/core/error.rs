//! Engine error type

use std::fmt;

/// Contract violations reported by the guess engine
///
/// Malformed guess text is not an error; see `GuessOutcome::NotANumber`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Bit width outside `4..=10`
    InvalidConfiguration(u8),
    /// Negative or non-numeric value handed to the binary formatter
    InvalidInput(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(bits) => {
                write!(f, "Bit width must be between 4 and 10, got {bits}")
            }
            Self::InvalidInput(value) => {
                write!(f, "Expected a non-negative integer, got '{value}'")
            }
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            EngineError::InvalidConfiguration(12).to_string(),
            "Bit width must be between 4 and 10, got 12"
        );
        assert_eq!(
            EngineError::InvalidInput("-3".to_string()).to_string(),
            "Expected a non-negative integer, got '-3'"
        );
    }
}
