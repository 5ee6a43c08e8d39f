//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides application-level services including:
//! - [`QuoteAggregationEngine`]: Offering collection, normalization and ranking
//! - [`RankingStrategy`]: Strategies for ranking quotes
//! - [`QuoteSession`]: Last-request-wins quote board
//! - [`CredentialBoard`]: Classified credentials for the current input
//! - [`ExchangeForm`]: Pair and amount selection

pub mod credential_classifier;
pub mod exchange_form;
pub mod quote_aggregation;
pub mod quote_session;
pub mod ranking_strategy;
pub mod request_gate;

pub use credential_classifier::{CredentialBoard, classify_credentials, classify_outcome};
pub use exchange_form::ExchangeForm;
pub use quote_aggregation::{
    AggregationConfig, AggregationResult, DroppedOffering, QuoteAggregationEngine, QuoteOutcome,
    compute_quotes,
};
pub use quote_session::{QuoteSession, QuoteSnapshot};
pub use ranking_strategy::{BestReturnStrategy, RankedQuote, RankingStrategy, rank};
pub use request_gate::{Published, RequestGate, RequestStatus, RequestTicket};
