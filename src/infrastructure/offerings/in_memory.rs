//! # In-Memory Offering Repository
//!
//! In-memory implementation of [`OfferingRepository`].
//!
//! Backs tests and the command line tool. Offerings are stored per pair;
//! a pair with nothing stored answers with an empty list. A failure and an
//! artificial latency can be injected to exercise the engine's error and
//! supersession paths.

use crate::domain::entities::RawOffering;
use crate::domain::value_objects::CurrencyPair;
use crate::infrastructure::offerings::error::{FetchError, FetchResult};
use crate::infrastructure::offerings::traits::OfferingRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// In-memory implementation of [`OfferingRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryOfferingRepository {
    storage: Arc<RwLock<HashMap<CurrencyPair, Vec<RawOffering>>>>,
    failure: Arc<RwLock<Option<FetchError>>>,
    latency: Option<Duration>,
}

impl InMemoryOfferingRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `offerings`, grouped by their own
    /// payin/payout currencies. Offerings whose legs share a currency are
    /// unreachable through any valid pair and are not stored.
    #[must_use]
    pub fn from_offerings(offerings: impl IntoIterator<Item = RawOffering>) -> Self {
        let mut map: HashMap<CurrencyPair, Vec<RawOffering>> = HashMap::new();
        for offering in offerings {
            match CurrencyPair::new(offering.payin_currency(), offering.payout_currency()) {
                Ok(pair) => map.entry(pair).or_default().push(offering),
                Err(e) => {
                    tracing::warn!(offering_id = %offering.id(), error = %e, "ignoring offering");
                }
            }
        }
        Self {
            storage: Arc::new(RwLock::new(map)),
            ..Self::default()
        }
    }

    /// Delays every fetch by `latency`.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Replaces the offerings stored for `pair`.
    pub async fn insert(&self, pair: CurrencyPair, offerings: Vec<RawOffering>) {
        let mut storage = self.storage.write().await;
        storage.insert(pair, offerings);
    }

    /// Makes every subsequent fetch fail with `error`, or clears the
    /// failure when `None`.
    pub async fn set_failure(&self, error: Option<FetchError>) {
        let mut failure = self.failure.write().await;
        *failure = error;
    }

    /// Removes all offerings.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

#[async_trait]
impl OfferingRepository for InMemoryOfferingRepository {
    async fn fetch_offerings(&self, pair: CurrencyPair) -> FetchResult<Vec<RawOffering>> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if let Some(error) = self.failure.read().await.clone() {
            return Err(error);
        }
        let storage = self.storage.read().await;
        Ok(storage.get(&pair).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
