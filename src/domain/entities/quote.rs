//! # Quote Entity
//!
//! The computed outcome of applying an offering to an input amount.
//!
//! Quotes are produced by the quote normalizer, one per (offering, amount)
//! pair, and are never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use fiatsend_core::domain::entities::quote::Quote;
//! use fiatsend_core::domain::value_objects::{CurrencyCode, OfferingId};
//! use rust_decimal::Decimal;
//!
//! let quote = Quote::new(
//!     OfferingId::new("offering-1"),
//!     "AquaFinance",
//!     Decimal::new(12000, 2),
//!     Decimal::new(36, 2),
//!     CurrencyCode::Usdc,
//! ).unwrap();
//!
//! assert_eq!(quote.received_display(), "120.00 USDC");
//! assert_eq!(quote.fee_display(), "0.36 USDC");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{CURRENCY_SCALE, CurrencyCode, OfferingId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A quote derived from one offering for one input amount.
///
/// # Invariants
///
/// - `received_amount >= 0`
/// - `fee >= 0`
///
/// The fee is informational: `received_amount` is the gross payout and the
/// fee is never subtracted from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    offering_id: OfferingId,
    provider: String,
    received_amount: Decimal,
    fee: Decimal,
    currency: CurrencyCode,
}

impl Quote {
    /// Creates a new quote with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if `received_amount` or `fee`
    /// is negative.
    pub fn new(
        offering_id: OfferingId,
        provider: impl Into<String>,
        received_amount: Decimal,
        fee: Decimal,
        currency: CurrencyCode,
    ) -> DomainResult<Self> {
        if received_amount < Decimal::ZERO {
            return Err(DomainError::ValidationError(
                "received amount cannot be negative".to_string(),
            ));
        }
        if fee < Decimal::ZERO {
            return Err(DomainError::ValidationError(
                "fee cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            offering_id,
            provider: provider.into(),
            received_amount,
            fee,
            currency,
        })
    }

    /// Returns the offering this quote was computed from.
    #[inline]
    #[must_use]
    pub fn offering_id(&self) -> &OfferingId {
        &self.offering_id
    }

    /// Returns the provider name.
    #[inline]
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Returns the gross amount the user receives.
    #[inline]
    #[must_use]
    pub fn received_amount(&self) -> Decimal {
        self.received_amount
    }

    /// Returns the informational fee.
    #[inline]
    #[must_use]
    pub fn fee(&self) -> Decimal {
        self.fee
    }

    /// Returns the payout currency.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Formats the received amount for display, e.g. `"120.00 USDC"`.
    #[must_use]
    pub fn received_display(&self) -> String {
        format_money(self.received_amount, self.currency)
    }

    /// Formats the fee for display, e.g. `"0.36 USDC"`.
    #[must_use]
    pub fn fee_display(&self) -> String {
        format_money(self.fee, self.currency)
    }
}

fn format_money(value: Decimal, currency: CurrencyCode) -> String {
    let mut shown = value;
    shown.rescale(CURRENCY_SCALE);
    format!("{shown} {currency}")
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote({} fee {} from {})",
            self.received_display(),
            self.fee_display(),
            self.provider
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn quote(received: Decimal, fee: Decimal) -> DomainResult<Quote> {
        Quote::new(
            OfferingId::new("offering-1"),
            "AquaFinance",
            received,
            fee,
            CurrencyCode::Usdc,
        )
    }

    #[test]
    fn new_accepts_zero_amounts() {
        let q = quote(Decimal::ZERO, Decimal::ZERO).unwrap();
        assert_eq!(q.received_display(), "0.00 USDC");
        assert_eq!(q.fee_display(), "0.00 USDC");
    }

    #[test]
    fn new_rejects_negative_values() {
        assert!(quote(Decimal::new(-1, 2), Decimal::ZERO).is_err());
        assert!(quote(Decimal::ONE, Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn display_uses_two_decimals() {
        let q = quote(Decimal::new(60, 0), Decimal::new(18, 2)).unwrap();
        assert_eq!(q.to_string(), "Quote(60.00 USDC fee 0.18 USDC from AquaFinance)");
    }

    #[test]
    fn serializes_camel_case() {
        let q = quote(Decimal::new(12000, 2), Decimal::new(36, 2)).unwrap();
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["receivedAmount"], "120.00");
        assert_eq!(json["offeringId"], "offering-1");
    }
}
