//! # Quote Normalizer
//!
//! Turns a raw offering and an input amount into a comparable [`Quote`].
//!
//! ```text
//! received_amount = round_half_up(rate * amount, 2)
//! fee             = round_half_up(received_amount * fee_rate, 2)
//! ```
//!
//! The fee is informational only. It is computed from the already-rounded
//! received amount and is not deducted from it.
//!
//! # Examples
//!
//! ```
//! use fiatsend_core::domain::entities::RawOffering;
//! use fiatsend_core::domain::services::quote_normalizer::normalize;
//! use fiatsend_core::domain::value_objects::{Amount, CurrencyCode};
//!
//! let offering = RawOffering::new("o-1", "AquaFinance", CurrencyCode::Ghs, CurrencyCode::Usdc, "1.2");
//! let quote = normalize(&offering, "100".parse::<Amount>().unwrap()).unwrap();
//!
//! assert_eq!(quote.received_amount().to_string(), "120.00");
//! assert_eq!(quote.fee().to_string(), "0.36");
//! ```

use crate::domain::entities::{Quote, RawOffering};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Amount, CheckedArithmetic, Rate, round_currency};
use rust_decimal::Decimal;

/// Default fee rate: 0.3% of the received amount.
pub const FEE_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 3);

/// Computes quotes for a fixed fee rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteNormalizer {
    fee_rate: Decimal,
}

impl Default for QuoteNormalizer {
    fn default() -> Self {
        Self { fee_rate: FEE_RATE }
    }
}

impl QuoteNormalizer {
    /// Creates a normalizer with a custom fee rate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` unless `0 <= fee_rate < 1`.
    pub fn new(fee_rate: Decimal) -> DomainResult<Self> {
        if fee_rate < Decimal::ZERO || fee_rate >= Decimal::ONE {
            return Err(DomainError::ValidationError(format!(
                "fee rate must be in [0, 1): {fee_rate}"
            )));
        }
        Ok(Self { fee_rate })
    }

    /// Returns the fee rate applied to received amounts.
    #[must_use]
    pub fn fee_rate(&self) -> Decimal {
        self.fee_rate
    }

    /// Computes the quote for `offering` at `amount`.
    ///
    /// A zero amount yields a valid quote of `0.00` with a `0.00` fee.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRate` if the offering's rate is not a
    /// positive decimal, or an arithmetic error if the product overflows.
    pub fn normalize(&self, offering: &RawOffering, amount: Amount) -> DomainResult<Quote> {
        let rate: Rate = offering.payout_units_per_payin_unit().parse().map_err(|e| {
            match e {
                DomainError::InvalidRate(msg) => {
                    DomainError::InvalidRate(format!("offering {}: {msg}", offering.id()))
                }
                other => other,
            }
        })?;

        let received_amount = round_currency(rate.get().safe_mul(amount.get())?);
        let fee = round_currency(received_amount.safe_mul(self.fee_rate)?);

        Quote::new(
            offering.id().clone(),
            offering.provider_name(),
            received_amount,
            fee,
            offering.payout_currency(),
        )
    }
}

/// Computes a quote using the default [`FEE_RATE`].
///
/// # Errors
///
/// See [`QuoteNormalizer::normalize`].
pub fn normalize(offering: &RawOffering, amount: Amount) -> DomainResult<Quote> {
    QuoteNormalizer::default().normalize(offering, amount)
}
