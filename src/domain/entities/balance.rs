//! # Token Balance Entity
//!
//! A wallet holding of one token together with its USD oracle rate.

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One token held by the wallet.
///
/// # Invariants
///
/// - `amount >= 0`
/// - `usd_rate >= 0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BalanceRecord")]
pub struct TokenBalance {
    token: String,
    amount: Decimal,
    usd_rate: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalanceRecord {
    token: String,
    amount: Decimal,
    usd_rate: Decimal,
}

impl TryFrom<BalanceRecord> for TokenBalance {
    type Error = DomainError;

    fn try_from(record: BalanceRecord) -> Result<Self, Self::Error> {
        Self::new(record.token, record.amount, record.usd_rate)
    }
}

impl TokenBalance {
    /// Creates a new balance.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the token symbol is blank or
    /// either number is negative.
    pub fn new(token: impl Into<String>, amount: Decimal, usd_rate: Decimal) -> DomainResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "token symbol cannot be blank".to_string(),
            ));
        }
        if amount < Decimal::ZERO || usd_rate < Decimal::ZERO {
            return Err(DomainError::ValidationError(format!(
                "balance for {token} cannot be negative"
            )));
        }
        Ok(Self {
            token,
            amount,
            usd_rate,
        })
    }

    /// Returns the token symbol.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the held amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the USD price of one token.
    #[must_use]
    pub fn usd_rate(&self) -> Decimal {
        self.usd_rate
    }
}
