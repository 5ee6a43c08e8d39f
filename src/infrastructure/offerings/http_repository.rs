//! # HTTP Offering Repository
//!
//! Fetches offerings from a PFI over HTTP.
//!
//! ```text
//! GET {base_url}/offerings?payinCurrency=GHS&payoutCurrency=USDC
//! ```
//!
//! The response body is an [`OfferingsEnvelope`]. Status codes map onto
//! [`FetchError`]:
//!
//! | Status | Error |
//! |---|---|
//! | 404 | `NoOfferingsFound` |
//! | 5xx, connection failures | `Network` |
//! | client timeout | `Timeout` |
//! | anything else, unparseable body | `Protocol` |
//!
//! # Examples
//!
//! ```ignore
//! use fiatsend_core::infrastructure::offerings::HttpOfferingRepository;
//!
//! let repo = HttpOfferingRepository::new("https://pfi.example.com", 5000)?;
//! let offerings = repo.fetch_offerings(CurrencyPair::default()).await?;
//! ```

use crate::domain::entities::RawOffering;
use crate::domain::value_objects::CurrencyPair;
use crate::infrastructure::offerings::error::{FetchError, FetchResult};
use crate::infrastructure::offerings::traits::OfferingRepository;
use crate::infrastructure::offerings::wire::OfferingsEnvelope;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

/// Offering repository backed by a PFI HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpOfferingRepository {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl HttpOfferingRepository {
    /// Creates a repository for `base_url` with the request timeout.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Network` if the client cannot be created.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| FetchError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        })
    }

    /// Returns the configured base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    fn offerings_url(&self) -> String {
        format!("{}/offerings", self.base_url)
    }

    async fn handle_response(
        &self,
        pair: CurrencyPair,
        response: Response,
    ) -> FetchResult<OfferingsEnvelope> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<OfferingsEnvelope>()
                .await
                .map_err(|e| FetchError::protocol(format!("failed to parse offerings: {e}")))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(pair, status, &body))
        }
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::timeout_with_duration("offerings request timed out", self.timeout_ms)
        } else if error.is_connect() {
            FetchError::network(format!("connection failed: {error}"))
        } else {
            FetchError::network(format!("HTTP request failed: {error}"))
        }
    }

    fn map_status_error(&self, pair: CurrencyPair, status: StatusCode, body: &str) -> FetchError {
        match status {
            StatusCode::NOT_FOUND => FetchError::no_offerings_found(pair),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                FetchError::timeout(format!("server timeout ({status}): {body}"))
            }
            s if s.is_server_error() => FetchError::network(format!("server error ({s}): {body}")),
            _ => FetchError::protocol(format!("HTTP error ({status}): {body}")),
        }
    }
}

#[async_trait]
impl OfferingRepository for HttpOfferingRepository {
    async fn fetch_offerings(&self, pair: CurrencyPair) -> FetchResult<Vec<RawOffering>> {
        let params = [
            ("payinCurrency", pair.from().as_str()),
            ("payoutCurrency", pair.to().as_str()),
        ];
        let response = self
            .client
            .get(self.offerings_url())
            .query(&params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let envelope = self.handle_response(pair, response).await?;
        let offerings = envelope.into_offerings();
        tracing::debug!(%pair, count = offerings.len(), "fetched offerings");
        Ok(offerings)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
