//! Bit width selection
//!
//! A `BitWidth` is the number of binary digits a quiz target is shown with.
//! Only widths 4 through 10 are playable.

use super::EngineError;
use std::fmt;
use std::ops::RangeInclusive;

/// Smallest target ever generated, regardless of width
pub const MIN_TARGET: u32 = 3;

/// Validated bit width in the range `4..=10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitWidth(u8);

impl BitWidth {
    /// Narrowest playable width
    pub const MIN: Self = Self(4);

    /// Widest playable width
    pub const MAX: Self = Self(10);

    /// Width a new session starts with
    pub const DEFAULT: Self = Self(5);

    /// Create a bit width, rejecting anything outside `4..=10`
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfiguration` if `bits` is out of range.
    /// Out-of-range values are never clamped.
    ///
    /// # Examples
    /// ```
    /// use binary_quiz::core::BitWidth;
    ///
    /// let width = BitWidth::new(6).unwrap();
    /// assert_eq!(width.get(), 6);
    ///
    /// assert!(BitWidth::new(3).is_err());
    /// assert!(BitWidth::new(11).is_err());
    /// ```
    pub fn new(bits: u8) -> Result<Self, EngineError> {
        if bits < Self::MIN.0 || bits > Self::MAX.0 {
            return Err(EngineError::InvalidConfiguration(bits));
        }
        Ok(Self(bits))
    }

    /// Raw number of bits
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Largest target for this width: `2^(bits-1) - 1`
    ///
    /// The top bit is never set, so every target fits in `bits - 1` digits.
    #[inline]
    #[must_use]
    pub const fn max_target(self) -> u32 {
        (1u32 << (self.0 - 1)) - 1
    }

    /// Inclusive interval targets are drawn from
    ///
    /// # Examples
    /// ```
    /// use binary_quiz::core::BitWidth;
    ///
    /// let range = BitWidth::new(5).unwrap().target_range();
    /// assert_eq!(range, 3..=15);
    /// ```
    #[must_use]
    pub const fn target_range(self) -> RangeInclusive<u32> {
        MIN_TARGET..=self.max_target()
    }

    /// Next wider width, staying at `MAX`
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 >= Self::MAX.0 {
            self
        } else {
            Self(self.0 + 1)
        }
    }

    /// Next narrower width, staying at `MIN`
    #[must_use]
    pub const fn prev(self) -> Self {
        if self.0 <= Self::MIN.0 {
            self
        } else {
            Self(self.0 - 1)
        }
    }

    /// Every playable width, narrowest first
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl Default for BitWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for BitWidth {
    type Error = EngineError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_accepts_playable_range() {
        for bits in 4..=10 {
            assert_eq!(BitWidth::new(bits).unwrap().get(), bits);
        }
    }

    #[test]
    fn width_rejects_out_of_range() {
        assert_eq!(
            BitWidth::new(3),
            Err(EngineError::InvalidConfiguration(3))
        );
        assert_eq!(
            BitWidth::new(11),
            Err(EngineError::InvalidConfiguration(11))
        );
        assert!(BitWidth::new(0).is_err());
        assert!(BitWidth::new(u8::MAX).is_err());
    }

    #[test]
    fn width_target_ranges() {
        assert_eq!(BitWidth::new(4).unwrap().target_range(), 3..=7);
        assert_eq!(BitWidth::new(5).unwrap().target_range(), 3..=15);
        assert_eq!(BitWidth::new(10).unwrap().target_range(), 3..=511);
    }

    #[test]
    fn width_steps_saturate() {
        assert_eq!(BitWidth::MAX.next(), BitWidth::MAX);
        assert_eq!(BitWidth::MIN.prev(), BitWidth::MIN);
        assert_eq!(BitWidth::DEFAULT.next().get(), 6);
        assert_eq!(BitWidth::DEFAULT.prev().get(), 4);
    }

    #[test]
    fn width_all_covers_range() {
        let bits: Vec<u8> = BitWidth::all().map(BitWidth::get).collect();
        assert_eq!(bits, vec![4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn width_try_from() {
        assert_eq!(BitWidth::try_from(7u8).unwrap().get(), 7);
        assert!(BitWidth::try_from(2u8).is_err());
    }

    #[test]
    fn width_display() {
        assert_eq!(BitWidth::DEFAULT.to_string(), "5 bits");
    }
}
