//! # Currency Value Objects
//!
//! Supported currency codes and validated currency pairs.
//!
//! - [`CurrencyCode`] - Closed set of currencies the wallet can exchange
//! - [`CurrencyPair`] - A `from -> to` pair whose sides always differ
//!
//! # Examples
//!
//! ```
//! use fiatsend_core::domain::value_objects::currency::{CurrencyCode, CurrencyPair};
//!
//! let pair = CurrencyPair::default();
//! assert_eq!(pair.from(), CurrencyCode::Ghs);
//! assert_eq!(pair.to(), CurrencyCode::Usdc);
//!
//! let swapped = pair.swapped();
//! assert_eq!(swapped.to_string(), "USDC/GHS");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency codes offered in the exchange selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// Ghanaian cedi.
    Ghs,
    /// USD Coin stablecoin.
    Usdc,
    /// Kenyan shilling.
    Kes,
    /// US dollar.
    Usd,
    /// Nigerian naira.
    Ngn,
}

impl CurrencyCode {
    /// All supported codes, in selector order.
    pub const ALL: [Self; 5] = [Self::Ghs, Self::Usdc, Self::Kes, Self::Usd, Self::Ngn];

    /// Returns the ISO-style code string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ghs => "GHS",
            Self::Usdc => "USDC",
            Self::Kes => "KES",
            Self::Usd => "USD",
            Self::Ngn => "NGN",
        }
    }

    /// Returns true for on-chain stablecoins.
    #[inline]
    #[must_use]
    pub const fn is_stablecoin(self) -> bool {
        matches!(self, Self::Usdc)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GHS" => Ok(Self::Ghs),
            "USDC" => Ok(Self::Usdc),
            "KES" => Ok(Self::Kes),
            "USD" => Ok(Self::Usd),
            "NGN" => Ok(Self::Ngn),
            _ => Err(DomainError::UnsupportedCurrency(s.to_string())),
        }
    }
}

/// A currency pair selected for exchange.
///
/// # Invariants
///
/// - `from != to`
/// - Both sides always hold a supported code; a pair is never partially set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PairRecord")]
pub struct CurrencyPair {
    from: CurrencyCode,
    to: CurrencyCode,
}

#[derive(Deserialize)]
struct PairRecord {
    from: CurrencyCode,
    to: CurrencyCode,
}

impl TryFrom<PairRecord> for CurrencyPair {
    type Error = DomainError;

    fn try_from(record: PairRecord) -> Result<Self, Self::Error> {
        Self::new(record.from, record.to)
    }
}

impl CurrencyPair {
    /// Creates a validated pair.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SameCurrencyPair` if both sides are equal.
    pub fn new(from: CurrencyCode, to: CurrencyCode) -> DomainResult<Self> {
        if from == to {
            return Err(DomainError::SameCurrencyPair(from));
        }
        Ok(Self { from, to })
    }

    /// Parses a pair from two code strings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedCurrency` for an unknown code and
    /// `DomainError::SameCurrencyPair` if both codes are equal.
    pub fn parse(from: &str, to: &str) -> DomainResult<Self> {
        Self::new(from.parse()?, to.parse()?)
    }

    /// Returns the currency being sent.
    #[inline]
    #[must_use]
    pub const fn from(&self) -> CurrencyCode {
        self.from
    }

    /// Returns the currency being received.
    #[inline]
    #[must_use]
    pub const fn to(&self) -> CurrencyCode {
        self.to
    }

    /// Returns the pair with its sides exchanged.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns a pair with a new `from` currency.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SameCurrencyPair` if `from` equals the current `to`.
    pub fn with_from(self, from: CurrencyCode) -> DomainResult<Self> {
        Self::new(from, self.to)
    }

    /// Returns a pair with a new `to` currency.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SameCurrencyPair` if `to` equals the current `from`.
    pub fn with_to(self, to: CurrencyCode) -> DomainResult<Self> {
        Self::new(self.from, to)
    }
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self {
            from: CurrencyCode::Ghs,
            to: CurrencyCode::Usdc,
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}
