//! # Money Arithmetic
//!
//! Overflow-checked decimal operations and half-up rounding to a pinned
//! scale.
//!
//! ```
//! use fiatsend_core::domain::value_objects::arithmetic::{round_half_up, round_currency};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(round_half_up(Decimal::new(1005, 3), 2), Decimal::new(101, 2));
//! assert_eq!(round_currency(Decimal::new(120, 0)).to_string(), "120.00");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places used for currency display and quote amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// A decimal operation left the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// The result does not fit in a `Decimal`.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Rounds `value` to `scale` places, ties away from zero.
///
/// The result always carries exactly `scale` fractional digits.
#[inline]
#[must_use]
pub fn round_half_up(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded
}

/// Rounds `value` half-up to [`CURRENCY_SCALE`] places.
#[inline]
#[must_use]
pub fn round_currency(value: Decimal) -> Decimal {
    round_half_up(value, CURRENCY_SCALE)
}

/// Overflow-checked addition and multiplication.
pub trait CheckedArithmetic: Sized {
    /// Adds `rhs`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the sum is out of range.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Multiplies by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product is out of range.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn midpoint_rounds_away_from_zero() {
        assert_eq!(round_half_up(dec("1.005"), 2), dec("1.01"));
        assert_eq!(round_half_up(dec("1.004"), 2), dec("1.00"));
        assert_eq!(round_half_up(dec("0.125"), 2), dec("0.13"));
        assert_eq!(round_half_up(dec("0.0667"), 6).to_string(), "0.066700");
    }

    #[test]
    fn currency_scale_is_pinned() {
        let rounded = round_currency(Decimal::new(120, 0));
        assert_eq!(rounded.scale(), 2);
        assert_eq!(rounded.to_string(), "120.00");
        assert_eq!(round_currency(Decimal::ZERO).to_string(), "0.00");
    }

    #[test]
    fn checked_ops() {
        assert_eq!(dec("1.2").safe_mul(dec("100")).unwrap(), dec("120.0"));
        assert_eq!(dec("0.1").safe_add(dec("0.2")).unwrap(), dec("0.3"));
        assert_eq!(Decimal::MAX.safe_mul(Decimal::TWO), Err(ArithmeticError::Overflow));
        assert_eq!(Decimal::MAX.safe_add(Decimal::ONE), Err(ArithmeticError::Overflow));
    }
}
