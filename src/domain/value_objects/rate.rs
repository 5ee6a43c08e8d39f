//! # Rate Value Object
//!
//! A provider's exchange rate, expressed as payout units per payin unit.
//!
//! # Examples
//!
//! ```
//! use fiatsend_core::domain::value_objects::rate::Rate;
//!
//! let rate: Rate = "1.2".parse().unwrap();
//! assert_eq!(rate.to_string(), "1.2");
//!
//! assert!("0".parse::<Rate>().is_err());
//! assert!("-1.5".parse::<Rate>().is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated, strictly positive exchange rate.
///
/// # Invariants
///
/// - Rate is always > 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rate(Decimal);

impl Rate {
    /// Creates a rate from a Decimal value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRate` if the value is zero or negative.
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value <= Decimal::ZERO {
            return Err(DomainError::InvalidRate(format!(
                "rate must be positive: {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Creates a rate from an f64 value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRate` if the value is non-finite,
    /// non-positive, or outside the decimal range.
    pub fn from_f64(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::InvalidRate(format!(
                "rate must be finite: {value}"
            )));
        }
        let decimal = Decimal::try_from(value)
            .map_err(|_| DomainError::InvalidRate(format!("rate out of range: {value}")))?;
        Self::from_decimal(decimal)
    }

    /// Returns the inner Decimal value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }
}

impl FromStr for Rate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| DomainError::InvalidRate(format!("not a number: {trimmed:?}")))?;
        Self::from_decimal(decimal)
    }
}

impl TryFrom<Decimal> for Rate {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Rate> for Decimal {
    fn from(rate: Rate) -> Self {
        rate.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
