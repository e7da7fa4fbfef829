//! Convert command
//!
//! Formats a decimal value the way the quiz displays targets.

use crate::core::{BitWidth, EngineError, format_binary_text, group_bits};

/// Result of converting one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertResult {
    pub input: String,
    pub width: BitWidth,
    pub binary: String,
    pub grouped: String,
    /// Whether the value fits in `width` digits without widening
    pub fits: bool,
}

/// Convert decimal text to its padded binary form
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` for negative or non-numeric text.
///
/// # Examples
/// ```
/// use binary_quiz::commands::convert_value;
/// use binary_quiz::core::BitWidth;
///
/// let result = convert_value("9", BitWidth::new(5).unwrap()).unwrap();
/// assert_eq!(result.binary, "01001");
/// assert!(result.fits);
/// ```
pub fn convert_value(text: &str, width: BitWidth) -> Result<ConvertResult, EngineError> {
    let binary = format_binary_text(text, width)?;
    let grouped = group_bits(&binary, 4);
    let fits = binary.len() <= usize::from(width.get());

    Ok(ConvertResult {
        input: text.trim().to_string(),
        width,
        binary,
        grouped,
        fits,
    })
}
