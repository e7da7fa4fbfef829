//! Decimal to binary conversion
//!
//! Targets are shown as base-2 strings left-padded with `'0'` up to the
//! selected bit width. Values needing more digits than the width are
//! printed in full, never truncated.

use super::{BitWidth, EngineError};

/// Format a non-negative integer as a zero-padded binary string
///
/// # Errors
/// Returns `EngineError::InvalidInput` if `value` is negative.
///
/// # Examples
/// ```
/// use binary_quiz::core::{BitWidth, format_binary};
///
/// let width = BitWidth::new(5).unwrap();
/// assert_eq!(format_binary(9, width).unwrap(), "01001");
///
/// // Wider values are left unpadded, not truncated
/// let narrow = BitWidth::new(4).unwrap();
/// assert_eq!(format_binary(100, narrow).unwrap(), "1100100");
///
/// assert!(format_binary(-1, width).is_err());
/// ```
pub fn format_binary(value: i64, width: BitWidth) -> Result<String, EngineError> {
    let value = u64::try_from(value).map_err(|_| EngineError::InvalidInput(value.to_string()))?;
    Ok(pad_binary(value, width))
}

/// Binary digits of `value` padded to `width`; infallible for unsigned input
pub(crate) fn pad_binary(value: u64, width: BitWidth) -> String {
    format!("{value:0width$b}", width = usize::from(width.get()))
}

/// Parse decimal text and format it as a zero-padded binary string
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// Returns `EngineError::InvalidInput` if the text is not a non-negative
/// base-10 integer.
///
/// # Examples
/// ```
/// use binary_quiz::core::{BitWidth, format_binary_text};
///
/// let width = BitWidth::new(8).unwrap();
/// assert_eq!(format_binary_text(" 42 ", width).unwrap(), "00101010");
/// assert!(format_binary_text("forty-two", width).is_err());
/// ```
pub fn format_binary_text(text: &str, width: BitWidth) -> Result<String, EngineError> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| EngineError::InvalidInput(trimmed.to_string()))?;
    format_binary(value, width)
}

/// Parse a string of `'0'`/`'1'` digits back into an integer
///
/// Inverse of [`format_binary`]. Returns `None` for empty strings, any
/// other character, or values that overflow `u64`.
#[must_use]
pub fn parse_binary(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u64::from_str_radix(digits, 2).ok()
}

/// Split a binary string into groups of `group` digits, counted from the right
///
/// ```
/// use binary_quiz::core::group_bits;
///
/// assert_eq!(group_bits("0100101", 4), "010 0101");
/// assert_eq!(group_bits("1010", 4), "1010");
/// ```
#[must_use]
pub fn group_bits(digits: &str, group: usize) -> String {
    if group == 0 {
        return digits.to_string();
    }

    let len = digits.chars().count();
    let mut result = String::with_capacity(len + len / group);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % group == 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}
