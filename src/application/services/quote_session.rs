//! # Quote Session
//!
//! Keeps the quote board for the current exchange form up to date.
//!
//! Each [`QuoteSession::request`] fetches, normalizes and ranks quotes for a
//! pair and amount and publishes the result as a [`QuoteSnapshot`]. Only the
//! most recent request may publish: an older request still fetching when a
//! newer one begins is abandoned and reports [`RequestStatus::Superseded`].

use crate::application::services::exchange_form::ExchangeForm;
use crate::application::services::quote_aggregation::{QuoteAggregationEngine, QuoteOutcome};
use crate::application::services::request_gate::{Published, RequestGate, RequestStatus};
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{Amount, CurrencyPair, RequestId};
use serde::Serialize;
use std::sync::Arc;

/// The published result of one quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    /// Identifier of the request that produced this snapshot.
    pub request_id: RequestId,
    /// The requested pair.
    pub pair: CurrencyPair,
    /// The requested input amount.
    pub amount: Amount,
    /// What the request produced.
    pub outcome: QuoteOutcome,
}

/// Last-request-wins quote board.
#[derive(Debug)]
pub struct QuoteSession {
    engine: QuoteAggregationEngine,
    gate: RequestGate,
    latest: Published<QuoteSnapshot>,
}

impl QuoteSession {
    /// Creates a session around an engine.
    #[must_use]
    pub fn new(engine: QuoteAggregationEngine) -> Self {
        Self {
            engine,
            gate: RequestGate::new(),
            latest: Published::new(),
        }
    }

    /// Requests quotes for `pair` at `amount`.
    ///
    /// Supersedes any request still in flight on this session.
    #[tracing::instrument(
        skip(self),
        fields(request_id = tracing::field::Empty, pair = %pair, amount = %amount)
    )]
    pub async fn request(&self, pair: CurrencyPair, amount: Amount) -> RequestStatus<QuoteSnapshot> {
        let request_id = RequestId::new_v4();
        tracing::Span::current().record("request_id", tracing::field::display(request_id));

        let mut ticket = self.gate.begin();
        let Some(outcome) = ticket.run(self.engine.collect_and_rank(pair, amount)).await else {
            tracing::debug!("quote request superseded while fetching");
            return RequestStatus::Superseded;
        };

        let snapshot = Arc::new(QuoteSnapshot {
            request_id,
            pair,
            amount,
            outcome,
        });

        if self.latest.publish(&ticket, Arc::clone(&snapshot)) {
            tracing::info!(status = snapshot.outcome.status(), "published quote snapshot");
            RequestStatus::Published(snapshot)
        } else {
            tracing::debug!("quote result discarded, newer request active");
            RequestStatus::Superseded
        }
    }

    /// Requests quotes for the form's current pair and amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the amount input does not
    /// parse; no request is started in that case.
    pub async fn request_form(&self, form: &ExchangeForm) -> DomainResult<RequestStatus<QuoteSnapshot>> {
        let amount = form.parsed_amount()?;
        Ok(self.request(form.pair(), amount).await)
    }

    /// Returns the most recently published snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<Arc<QuoteSnapshot>> {
        self.latest.get()
    }

    /// Returns the underlying engine.
    #[must_use]
    pub fn engine(&self) -> &QuoteAggregationEngine {
        &self.engine
    }
}
