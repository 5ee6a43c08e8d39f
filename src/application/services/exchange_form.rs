//! # Exchange Form
//!
//! The user's pending exchange selection: a currency pair plus the amount
//! as typed. All state is explicit and passed to the quote session.

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{Amount, CurrencyCode, CurrencyPair};
use serde::{Deserialize, Serialize};

/// Label shown when a positive amount is entered.
pub const REVIEW_LABEL: &str = "Review Exchange";

/// Label shown otherwise.
pub const EXCHANGE_LABEL: &str = "Exchange";

/// Pair and amount input for an exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeForm {
    pair: CurrencyPair,
    amount_input: String,
}

impl ExchangeForm {
    /// Creates a form for `pair` with an empty amount.
    #[must_use]
    pub fn new(pair: CurrencyPair) -> Self {
        Self {
            pair,
            amount_input: String::new(),
        }
    }

    /// Returns the selected pair.
    #[must_use]
    pub fn pair(&self) -> CurrencyPair {
        self.pair
    }

    /// Returns the amount exactly as typed.
    #[must_use]
    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    /// Replaces the amount input. Parsing is deferred to
    /// [`parsed_amount`](Self::parsed_amount).
    pub fn set_amount(&mut self, input: impl Into<String>) {
        self.amount_input = input.into();
    }

    /// Selects the currency to pay in.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SameCurrencyPair` if `code` is the current
    /// payout currency; the form is left unchanged.
    pub fn select_from(&mut self, code: CurrencyCode) -> DomainResult<()> {
        self.pair = self.pair.with_from(code)?;
        Ok(())
    }

    /// Selects the currency to receive.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SameCurrencyPair` if `code` is the current
    /// payin currency; the form is left unchanged.
    pub fn select_to(&mut self, code: CurrencyCode) -> DomainResult<()> {
        self.pair = self.pair.with_to(code)?;
        Ok(())
    }

    /// Swaps the pay and receive currencies. The amount is kept.
    pub fn swap(&mut self) {
        self.pair = self.pair.swapped();
    }

    /// Clears the amount and restores the default pair.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Parses the amount input. Blank input is zero.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` for non-numeric or negative input.
    pub fn parsed_amount(&self) -> DomainResult<Amount> {
        self.amount_input.parse()
    }

    /// Returns the label for the submit action.
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        match self.parsed_amount() {
            Ok(amount) if amount.is_positive() => REVIEW_LABEL,
            _ => EXCHANGE_LABEL,
        }
    }
}
