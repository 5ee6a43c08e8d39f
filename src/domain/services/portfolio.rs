//! # Portfolio Valuation
//!
//! Values a set of token balances in USD.
//!
//! Each line's USD value is `amount * usd_rate`. The total is summed from the
//! unrounded line values and only rounded (half-up, two decimals) at the end.

use crate::domain::entities::TokenBalance;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{CheckedArithmetic, round_currency, round_half_up};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal places shown for oracle rates.
pub const RATE_DISPLAY_SCALE: u32 = 6;

/// One valued balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceLine {
    /// Token symbol.
    pub token: String,
    /// Held amount, rounded to two decimals.
    pub amount: Decimal,
    /// USD rate, rounded to six decimals.
    pub usd_rate: Decimal,
    /// USD value of the holding, rounded to two decimals.
    pub usd_value: Decimal,
}

/// USD valuation of a whole wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    /// Per-token lines in input order.
    pub lines: Vec<BalanceLine>,
    /// Sum of all holdings in USD, rounded to two decimals.
    pub total_usd: Decimal,
}

impl PortfolioValuation {
    /// Formats the total for display, e.g. `"$1234.50"`.
    #[must_use]
    pub fn total_display(&self) -> String {
        format!("${}", self.total_usd)
    }
}

/// Values every balance and sums the result.
///
/// # Errors
///
/// Returns an arithmetic error if a product or the running total overflows.
pub fn value_portfolio(balances: &[TokenBalance]) -> DomainResult<PortfolioValuation> {
    let mut total = Decimal::ZERO;
    let mut lines = Vec::with_capacity(balances.len());

    for balance in balances {
        let value = balance.amount().safe_mul(balance.usd_rate())?;
        total = total.safe_add(value)?;
        lines.push(BalanceLine {
            token: balance.token().to_string(),
            amount: round_currency(balance.amount()),
            usd_rate: round_half_up(balance.usd_rate(), RATE_DISPLAY_SCALE),
            usd_value: round_currency(value),
        });
    }

    Ok(PortfolioValuation {
        lines,
        total_usd: round_currency(total),
    })
}
