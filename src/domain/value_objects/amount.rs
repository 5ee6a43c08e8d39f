//! # Amount Value Object
//!
//! The user-entered amount to exchange.
//!
//! [`Amount`] wraps a non-negative [`Decimal`]. It is the only way an input
//! amount enters quote computation, so everything downstream can assume the
//! value is numeric, finite, and `>= 0`.
//!
//! # Examples
//!
//! ```
//! use fiatsend_core::domain::value_objects::amount::Amount;
//!
//! let amount: Amount = "100".parse().unwrap();
//! assert!(amount.is_positive());
//!
//! // An empty field is a zero amount, not an error
//! let empty: Amount = "".parse().unwrap();
//! assert!(empty.is_zero());
//!
//! assert!("-5".parse::<Amount>().is_err());
//! assert!("abc".parse::<Amount>().is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated, non-negative input amount.
///
/// # Invariants
///
/// - Amount is always >= 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount constant.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount from a Decimal value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the value is negative.
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value < Decimal::ZERO {
            return Err(DomainError::InvalidAmount(format!(
                "amount cannot be negative: {value}"
            )));
        }
        Ok(Self(value.normalize()))
    }

    /// Creates an amount from an f64 value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the value is NaN, infinite,
    /// negative, or outside the decimal range.
    pub fn from_f64(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::InvalidAmount(format!(
                "amount must be finite: {value}"
            )));
        }
        let decimal = Decimal::try_from(value)
            .map_err(|_| DomainError::InvalidAmount(format!("amount out of range: {value}")))?;
        Self::from_decimal(decimal)
    }

    /// Returns the inner Decimal value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[inline]
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    /// Parses user input. Blank input is treated as zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }
        let decimal = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| DomainError::InvalidAmount(format!("not a number: {trimmed:?}")))?;
        Self::from_decimal(decimal)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
