//! # Quote Aggregation Engine
//!
//! Orchestrates offering collection, quote normalization and ranking.
//!
//! This module provides [`compute_quotes`], the synchronous core that turns
//! a set of offerings into ranked quotes, and the [`QuoteAggregationEngine`]
//! which fetches offerings from an [`OfferingRepository`] first and reports
//! an explicit [`QuoteOutcome`].

use crate::application::services::ranking_strategy::{
    BestReturnStrategy, RankedQuote, RankingStrategy,
};
use crate::domain::entities::RawOffering;
use crate::domain::entities::quote::Quote;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::quote_normalizer::{FEE_RATE, QuoteNormalizer};
use crate::domain::value_objects::{Amount, CurrencyPair, OfferingId};
use crate::infrastructure::offerings::error::FetchError;
use crate::infrastructure::offerings::traits::OfferingRepository;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Configuration for quote aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationConfig {
    /// Fee rate applied to received amounts.
    pub fee_rate: Decimal,
    /// Maximum number of quotes to return.
    pub max_quotes: Option<usize>,
    /// Timeout for fetching offerings in milliseconds.
    pub timeout_ms: u64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            fee_rate: FEE_RATE,
            max_quotes: None,
            timeout_ms: 10000,
        }
    }
}

impl AggregationConfig {
    /// Creates a new configuration with the specified fetch timeout.
    #[must_use]
    pub fn with_timeout(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            ..Default::default()
        }
    }

    /// Sets the maximum number of quotes to return.
    #[must_use]
    pub fn with_max_quotes(mut self, max: usize) -> Self {
        self.max_quotes = Some(max);
        self
    }

    /// Sets the fee rate.
    #[must_use]
    pub fn with_fee_rate(mut self, fee_rate: Decimal) -> Self {
        self.fee_rate = fee_rate;
        self
    }
}

/// An offering that could not be turned into a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedOffering {
    /// The offering's identifier.
    pub offering_id: OfferingId,
    /// Why it was dropped.
    pub reason: DomainError,
}

/// Result of evaluating a set of offerings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationResult {
    /// Ranked quotes (best first).
    pub ranked_quotes: Vec<RankedQuote>,
    /// Number of offerings evaluated.
    pub total_offerings: usize,
    /// Offerings dropped before ranking.
    pub dropped: Vec<DroppedOffering>,
}

impl AggregationResult {
    /// Returns the best quote, if any.
    #[must_use]
    pub fn best_quote(&self) -> Option<&RankedQuote> {
        self.ranked_quotes.first()
    }

    /// Converts the result into a request outcome.
    ///
    /// No offerings at all is `NoOfferings`; offerings that were all dropped
    /// is `AllOfferingsInvalid`.
    #[must_use]
    pub fn into_outcome(self) -> QuoteOutcome {
        if self.total_offerings == 0 {
            QuoteOutcome::NoOfferings
        } else if self.ranked_quotes.is_empty() {
            QuoteOutcome::AllOfferingsInvalid {
                dropped: self.dropped.len(),
            }
        } else {
            QuoteOutcome::Ready {
                quotes: self.ranked_quotes,
            }
        }
    }
}

/// Terminal outcome of one quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuoteOutcome {
    /// At least one quote was ranked.
    Ready {
        /// Ranked quotes, best first.
        quotes: Vec<RankedQuote>,
    },
    /// The provider returned an empty offering set.
    NoOfferings,
    /// Offerings were returned but none produced a valid quote.
    AllOfferingsInvalid {
        /// Number of offerings dropped.
        dropped: usize,
    },
    /// The offerings could not be fetched.
    Failed {
        /// The fetch error.
        error: FetchError,
    },
}

impl QuoteOutcome {
    /// Returns a short stable status name.
    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            Self::Ready { .. } => "ready",
            Self::NoOfferings => "no_offerings",
            Self::AllOfferingsInvalid { .. } => "all_offerings_invalid",
            Self::Failed { .. } => "failed",
        }
    }

    /// Returns the ranked quotes, empty unless `Ready`.
    #[must_use]
    pub fn quotes(&self) -> &[RankedQuote] {
        match self {
            Self::Ready { quotes } => quotes,
            _ => &[],
        }
    }

    /// Returns the best quote when `Ready`.
    #[must_use]
    pub fn best_quote(&self) -> Option<&RankedQuote> {
        self.quotes().first()
    }

    /// Returns true when quotes are available.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

impl fmt::Display for QuoteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready { quotes } => write!(f, "ready ({} quotes)", quotes.len()),
            Self::NoOfferings => write!(f, "no offerings"),
            Self::AllOfferingsInvalid { dropped } => {
                write!(f, "all offerings invalid ({dropped} dropped)")
            }
            Self::Failed { error } => write!(f, "failed: {error}"),
        }
    }
}

/// Normalizes and ranks `offerings` for `pair` at `amount`.
///
/// Offerings that do not serve the pair or carry an invalid rate are
/// dropped. Empty input yields an empty vector.
#[must_use]
pub fn compute_quotes(
    pair: CurrencyPair,
    amount: Amount,
    offerings: &[RawOffering],
) -> Vec<RankedQuote> {
    evaluate_offerings(
        &QuoteNormalizer::default(),
        &BestReturnStrategy,
        pair,
        amount,
        offerings,
    )
    .ranked_quotes
}

fn evaluate_offerings(
    normalizer: &QuoteNormalizer,
    strategy: &dyn RankingStrategy,
    pair: CurrencyPair,
    amount: Amount,
    offerings: &[RawOffering],
) -> AggregationResult {
    let mut quotes: Vec<Quote> = Vec::with_capacity(offerings.len());
    let mut dropped = Vec::new();

    for offering in offerings {
        match quote_for(normalizer, pair, amount, offering) {
            Ok(quote) => quotes.push(quote),
            Err(reason) => {
                tracing::debug!(
                    offering_id = %offering.id(),
                    provider = offering.provider_name(),
                    error = %reason,
                    "dropping offering"
                );
                dropped.push(DroppedOffering {
                    offering_id: offering.id().clone(),
                    reason,
                });
            }
        }
    }

    AggregationResult {
        ranked_quotes: strategy.rank(&quotes),
        total_offerings: offerings.len(),
        dropped,
    }
}

fn quote_for(
    normalizer: &QuoteNormalizer,
    pair: CurrencyPair,
    amount: Amount,
    offering: &RawOffering,
) -> DomainResult<Quote> {
    if !offering.serves(&pair) {
        return Err(DomainError::CurrencyMismatch {
            offering_id: offering.id().to_string(),
            expected: pair.to_string(),
            message: format!(
                "offering converts {} to {}",
                offering.payin_currency(),
                offering.payout_currency()
            ),
        });
    }
    normalizer.normalize(offering, amount)
}

/// Engine for collecting offerings and ranking their quotes.
#[derive(Debug, Clone)]
pub struct QuoteAggregationEngine {
    repository: Arc<dyn OfferingRepository>,
    ranking_strategy: Arc<dyn RankingStrategy>,
    normalizer: QuoteNormalizer,
    config: AggregationConfig,
}

impl QuoteAggregationEngine {
    /// Creates a new engine.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the configured fee rate is
    /// outside `[0, 1)`.
    pub fn new(
        repository: Arc<dyn OfferingRepository>,
        ranking_strategy: Arc<dyn RankingStrategy>,
        config: AggregationConfig,
    ) -> DomainResult<Self> {
        Ok(Self {
            repository,
            ranking_strategy,
            normalizer: QuoteNormalizer::new(config.fee_rate)?,
            config,
        })
    }

    /// Creates a new engine with the best return strategy and default
    /// configuration.
    #[must_use]
    pub fn with_defaults(repository: Arc<dyn OfferingRepository>) -> Self {
        Self {
            repository,
            ranking_strategy: Arc::new(BestReturnStrategy),
            normalizer: QuoteNormalizer::default(),
            config: AggregationConfig::default(),
        }
    }

    /// Normalizes and ranks already-fetched offerings.
    #[must_use]
    pub fn evaluate(
        &self,
        pair: CurrencyPair,
        amount: Amount,
        offerings: &[RawOffering],
    ) -> AggregationResult {
        let mut result = evaluate_offerings(
            &self.normalizer,
            self.ranking_strategy.as_ref(),
            pair,
            amount,
            offerings,
        );
        if let Some(max) = self.config.max_quotes {
            result.ranked_quotes.truncate(max);
        }
        result
    }

    /// Fetches offerings for the pair with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns the repository's error, or `FetchError::Timeout` when the
    /// fetch outlives the configured timeout.
    pub async fn fetch(&self, pair: CurrencyPair) -> Result<Vec<RawOffering>, FetchError> {
        let limit = Duration::from_millis(self.config.timeout_ms);
        match timeout(limit, self.repository.fetch_offerings(pair)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::timeout_with_duration(
                format!("{} repository did not answer", self.repository.name()),
                self.config.timeout_ms,
            )),
        }
    }

    /// Fetches, normalizes and ranks quotes for the pair.
    pub async fn collect_and_rank(&self, pair: CurrencyPair, amount: Amount) -> QuoteOutcome {
        match self.fetch(pair).await {
            Ok(offerings) => self.evaluate(pair, amount, &offerings).into_outcome(),
            Err(error) => {
                tracing::warn!(%pair, error = %error, "offering fetch failed");
                QuoteOutcome::Failed { error }
            }
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Returns the ranking strategy name.
    #[must_use]
    pub fn ranking_strategy_name(&self) -> &'static str {
        self.ranking_strategy.name()
    }
}
