//! # Offering Repository Trait
//!
//! Port definition for offering sources.
//!
//! An [`OfferingRepository`] returns the raw offerings published by liquidity
//! providers for a currency pair. Implementations may be slow, return stale
//! or empty data, or fail; the quote engine treats every outcome explicitly.
//!
//! # Examples
//!
//! ```ignore
//! use fiatsend_core::infrastructure::offerings::traits::OfferingRepository;
//!
//! struct MyPfiClient { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl OfferingRepository for MyPfiClient {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::RawOffering;
use crate::domain::value_objects::CurrencyPair;
use crate::infrastructure::offerings::error::FetchResult;
use async_trait::async_trait;
use std::fmt;

/// Source of raw offerings.
#[async_trait]
pub trait OfferingRepository: Send + Sync + fmt::Debug {
    /// Fetches all offerings for the pair.
    ///
    /// An empty vector is a valid answer and is distinct from
    /// `FetchError::NoOfferingsFound`.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` if the source cannot be reached or answers
    /// with something unusable.
    async fn fetch_offerings(&self, pair: CurrencyPair) -> FetchResult<Vec<RawOffering>>;

    /// Returns a short name for logging.
    fn name(&self) -> &'static str;
}
