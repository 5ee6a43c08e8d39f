//! # Offering Wire Format
//!
//! Serde records for the PFI offerings endpoint.
//!
//! ```json
//! {
//!   "data": [{
//!     "metadata": { "id": "offering_01", "from": "did:dht:aqua" },
//!     "data": {
//!       "payoutUnitsPerPayinUnit": "0.083",
//!       "payin":  { "currencyCode": "GHS" },
//!       "payout": { "currencyCode": "USDC" }
//!     }
//!   }]
//! }
//! ```
//!
//! A record whose rate is missing or not a string or number still
//! deserializes; its rate text is empty and the offering is later dropped as
//! an invalid rate. Records quoting a currency this wallet does not support
//! are skipped here with a warning and never reach quote evaluation, so a
//! response made only of such records counts as no offerings.

use crate::domain::entities::RawOffering;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::CurrencyCode;
use serde::{Deserialize, Serialize};

/// Response envelope of the offerings endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferingsEnvelope {
    /// Offering records.
    #[serde(default)]
    pub data: Vec<OfferingRecord>,
}

impl OfferingsEnvelope {
    /// Converts every record into a [`RawOffering`], skipping records whose
    /// currencies are not supported.
    #[must_use]
    pub fn into_offerings(self) -> Vec<RawOffering> {
        self.data
            .into_iter()
            .filter_map(|record| {
                let id = record.metadata.id.clone();
                match RawOffering::try_from(record) {
                    Ok(offering) => Some(offering),
                    Err(e) => {
                        tracing::warn!(offering_id = %id, error = %e, "skipping offering record");
                        None
                    }
                }
            })
            .collect()
    }
}

/// A single offering as published by a PFI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferingRecord {
    /// Resource metadata.
    pub metadata: OfferingMetadata,
    /// Offering terms.
    pub data: OfferingData,
}

/// Offering metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingMetadata {
    /// Offering identifier.
    pub id: String,
    /// Publishing provider (usually a DID).
    pub from: String,
    /// Creation time as sent by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Offering terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingData {
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Exchange rate; usually a string, sometimes a bare number.
    #[serde(default)]
    pub payout_units_per_payin_unit: WireDecimal,
    /// What the user pays in.
    pub payin: CurrencyDetails,
    /// What the user receives.
    pub payout: CurrencyDetails,
}

/// Currency details of one leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyDetails {
    /// ISO-like currency code.
    pub currency_code: String,
}

/// A decimal that may arrive as a JSON string or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireDecimal {
    /// Textual form, kept verbatim.
    Text(String),
    /// Numeric form.
    Number(serde_json::Number),
    /// Null, boolean, array or object.
    Malformed(serde_json::Value),
}

impl Default for WireDecimal {
    fn default() -> Self {
        Self::Malformed(serde_json::Value::Null)
    }
}

impl WireDecimal {
    /// Returns the value as text without interpreting it.
    ///
    /// Malformed values become empty text, which never parses as a rate.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
            Self::Malformed(value) => {
                tracing::debug!(%value, "offering rate is not a string or number");
                String::new()
            }
        }
    }
}

impl TryFrom<OfferingRecord> for RawOffering {
    type Error = DomainError;

    fn try_from(record: OfferingRecord) -> Result<Self, Self::Error> {
        let payin: CurrencyCode = record.data.payin.currency_code.parse()?;
        let payout: CurrencyCode = record.data.payout.currency_code.parse()?;
        Ok(RawOffering::new(
            record.metadata.id,
            record.metadata.from,
            payin,
            payout,
            record.data.payout_units_per_payin_unit.into_text(),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> OfferingsEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn parses_tbdex_records() {
        let offerings = envelope(json!({
            "data": [{
                "metadata": { "id": "o-1", "from": "did:dht:aqua", "createdAt": "2024-05-01T00:00:00Z" },
                "data": {
                    "description": "GHS for USDC",
                    "payoutUnitsPerPayinUnit": "0.083",
                    "payin": { "currencyCode": "ghs" },
                    "payout": { "currencyCode": "USDC" }
                }
            }]
        }))
        .into_offerings();

        assert_eq!(offerings.len(), 1);
        assert_eq!(offerings[0].id().as_str(), "o-1");
        assert_eq!(offerings[0].provider_name(), "did:dht:aqua");
        assert_eq!(offerings[0].payin_currency(), CurrencyCode::Ghs);
        assert_eq!(offerings[0].payout_units_per_payin_unit(), "0.083");
    }

    #[test]
    fn numeric_rate_is_carried_as_text() {
        let offerings = envelope(json!({
            "data": [{
                "metadata": { "id": "o-1", "from": "p" },
                "data": {
                    "payoutUnitsPerPayinUnit": 1.2,
                    "payin": { "currencyCode": "GHS" },
                    "payout": { "currencyCode": "USDC" }
                }
            }]
        }))
        .into_offerings();
        assert_eq!(offerings[0].payout_units_per_payin_unit(), "1.2");
    }

    #[test]
    fn unsupported_currencies_are_skipped() {
        let offerings = envelope(json!({
            "data": [
                {
                    "metadata": { "id": "eur", "from": "p" },
                    "data": {
                        "payoutUnitsPerPayinUnit": "1",
                        "payin": { "currencyCode": "EUR" },
                        "payout": { "currencyCode": "USDC" }
                    }
                },
                {
                    "metadata": { "id": "kes", "from": "p" },
                    "data": {
                        "payoutUnitsPerPayinUnit": "1",
                        "payin": { "currencyCode": "KES" },
                        "payout": { "currencyCode": "USDC" }
                    }
                }
            ]
        }))
        .into_offerings();
        assert_eq!(offerings.len(), 1);
        assert_eq!(offerings[0].id().as_str(), "kes");
    }

    #[test]
    fn malformed_rate_keeps_sibling_records() {
        let rates = [json!("1.2"), json!(null), json!(true), json!({ "value": "1.1" })];
        let mut records: Vec<_> = rates
            .iter()
            .enumerate()
            .map(|(i, rate)| {
                json!({
                    "metadata": { "id": format!("o-{i}"), "from": "p" },
                    "data": {
                        "payoutUnitsPerPayinUnit": rate,
                        "payin": { "currencyCode": "GHS" },
                        "payout": { "currencyCode": "USDC" }
                    }
                })
            })
            .collect();
        records.push(json!({
            "metadata": { "id": "no-rate", "from": "p" },
            "data": {
                "payin": { "currencyCode": "GHS" },
                "payout": { "currencyCode": "USDC" }
            }
        }));

        let offerings = envelope(json!({ "data": records })).into_offerings();

        assert_eq!(offerings.len(), 5);
        assert_eq!(offerings[0].payout_units_per_payin_unit(), "1.2");
        for offering in &offerings[1..] {
            assert_eq!(offering.payout_units_per_payin_unit(), "");
        }
    }

    #[test]
    fn only_unsupported_currencies_is_empty() {
        let offerings = envelope(json!({
            "data": [{
                "metadata": { "id": "eur", "from": "p" },
                "data": {
                    "payoutUnitsPerPayinUnit": "1",
                    "payin": { "currencyCode": "EUR" },
                    "payout": { "currencyCode": "USDC" }
                }
            }]
        }))
        .into_offerings();
        assert!(offerings.is_empty());
    }

    #[test]
    fn missing_data_is_empty() {
        assert!(envelope(json!({})).into_offerings().is_empty());
    }
}
