//! # Ranking Strategy
//!
//! Strategies for ranking quotes.
//!
//! This module provides the [`RankingStrategy`] trait and the default
//! [`BestReturnStrategy`], which orders quotes by what the user receives.

use crate::domain::entities::quote::Quote;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A quote with its ranking information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedQuote {
    /// The quote being ranked.
    #[serde(flatten)]
    pub quote: Quote,
    /// The rank (1 = best).
    pub rank: usize,
    /// True only for the rank 1 quote.
    pub is_best_return: bool,
}

impl RankedQuote {
    /// Creates a new ranked quote. The best-return flag follows the rank.
    #[must_use]
    pub fn new(quote: Quote, rank: usize) -> Self {
        Self {
            quote,
            rank,
            is_best_return: rank == 1,
        }
    }

    /// Returns true if this quote is the best (rank 1).
    #[must_use]
    pub fn is_best(&self) -> bool {
        self.is_best_return
    }
}

impl fmt::Display for RankedQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RankedQuote(#{} quote={})", self.rank, self.quote)
    }
}

/// Trait for ranking strategies.
///
/// Implementations must be deterministic: the same input slice always
/// yields the same ranking.
pub trait RankingStrategy: Send + Sync + fmt::Debug {
    /// Ranks the given quotes.
    ///
    /// # Returns
    ///
    /// A vector of ranked quotes sorted by rank (best first). Empty input
    /// yields an empty vector.
    fn rank(&self, quotes: &[Quote]) -> Vec<RankedQuote>;

    /// Returns the name of this ranking strategy.
    fn name(&self) -> &'static str;
}

/// Best return ranking strategy.
///
/// Orders by received amount descending, then fee ascending, then provider
/// name ascending. Full ties keep their input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestReturnStrategy;

impl BestReturnStrategy {
    /// Creates a new best return strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The ordering used by [`BestReturnStrategy`]. `Less` means `a` ranks
    /// ahead of `b`.
    #[must_use]
    pub fn compare(a: &Quote, b: &Quote) -> Ordering {
        b.received_amount()
            .cmp(&a.received_amount())
            .then_with(|| a.fee().cmp(&b.fee()))
            .then_with(|| a.provider().cmp(b.provider()))
    }
}

impl RankingStrategy for BestReturnStrategy {
    fn rank(&self, quotes: &[Quote]) -> Vec<RankedQuote> {
        let mut sorted: Vec<&Quote> = quotes.iter().collect();
        // sort_by is stable
        sorted.sort_by(|a, b| Self::compare(a, b));

        sorted
            .into_iter()
            .enumerate()
            .map(|(i, q)| RankedQuote::new(q.clone(), i + 1))
            .collect()
    }

    fn name(&self) -> &'static str {
        "BestReturn"
    }
}

/// Ranks quotes with [`BestReturnStrategy`].
#[must_use]
pub fn rank(quotes: &[Quote]) -> Vec<RankedQuote> {
    BestReturnStrategy.rank(quotes)
}
