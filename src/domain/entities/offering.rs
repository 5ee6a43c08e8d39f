//! # Offering Entity
//!
//! A provider's published exchange rate for a currency pair.
//!
//! [`RawOffering`] is what the offering repository hands to the core. The
//! rate is carried exactly as published (a decimal string) and is only
//! validated when a quote is computed, so one malformed offering can be
//! dropped without discarding the rest of the batch.
//!
//! # Examples
//!
//! ```
//! use fiatsend_core::domain::entities::offering::RawOffering;
//! use fiatsend_core::domain::value_objects::{CurrencyCode, CurrencyPair};
//!
//! let offering = RawOffering::new(
//!     "offering-1",
//!     "AquaFinance",
//!     CurrencyCode::Ghs,
//!     CurrencyCode::Usdc,
//!     "0.083",
//! );
//! assert!(offering.serves(&CurrencyPair::default()));
//! ```

use crate::domain::value_objects::{CurrencyCode, CurrencyPair, OfferingId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An offering as fetched from a provider. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOffering {
    id: OfferingId,
    provider_name: String,
    payin_currency: CurrencyCode,
    payout_currency: CurrencyCode,
    payout_units_per_payin_unit: String,
}

impl RawOffering {
    /// Creates a new raw offering.
    #[must_use]
    pub fn new(
        id: impl Into<OfferingId>,
        provider_name: impl Into<String>,
        payin_currency: CurrencyCode,
        payout_currency: CurrencyCode,
        payout_units_per_payin_unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            provider_name: provider_name.into(),
            payin_currency,
            payout_currency,
            payout_units_per_payin_unit: payout_units_per_payin_unit.into(),
        }
    }

    /// Returns the offering ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &OfferingId {
        &self.id
    }

    /// Returns the publishing provider's name.
    #[inline]
    #[must_use]
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Returns the currency the user pays in.
    #[inline]
    #[must_use]
    pub fn payin_currency(&self) -> CurrencyCode {
        self.payin_currency
    }

    /// Returns the currency the user receives.
    #[inline]
    #[must_use]
    pub fn payout_currency(&self) -> CurrencyCode {
        self.payout_currency
    }

    /// Returns the published rate, unvalidated.
    #[inline]
    #[must_use]
    pub fn payout_units_per_payin_unit(&self) -> &str {
        &self.payout_units_per_payin_unit
    }

    /// Returns true if this offering exchanges `pair.from` into `pair.to`.
    #[must_use]
    pub fn serves(&self, pair: &CurrencyPair) -> bool {
        self.payin_currency == pair.from() && self.payout_currency == pair.to()
    }
}

impl fmt::Display for RawOffering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Offering({} {}->{} @ {} from {})",
            self.id,
            self.payin_currency,
            self.payout_currency,
            self.payout_units_per_payin_unit,
            self.provider_name
        )
    }
}
