//! # Offering Fetch Errors
//!
//! Error types for offering repository operations.
//!
//! # Examples
//!
//! ```
//! use fiatsend_core::infrastructure::offerings::error::FetchError;
//!
//! let error = FetchError::timeout_with_duration("request timed out", 5000);
//! assert!(error.is_retryable());
//!
//! let error = FetchError::protocol("missing data field");
//! assert!(!error.is_retryable());
//! ```

use crate::domain::value_objects::CurrencyPair;
use serde::Serialize;
use thiserror::Error;

/// Error type for offering repository operations.
///
/// `NoOfferingsFound` is the provider explicitly reporting that it has no
/// offerings for the pair. It is distinct from a successful fetch that
/// returns an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchError {
    /// Network or connection error.
    #[error("offering network error: {message}")]
    Network {
        /// Error message.
        message: String,
    },

    /// The provider reported no offerings for the pair.
    #[error("no offerings found for {pair}")]
    NoOfferingsFound {
        /// The requested pair.
        pair: CurrencyPair,
    },

    /// Request timed out.
    #[error("offering timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// The response could not be understood.
    #[error("offering protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },
}

impl FetchError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a no-offerings error for the pair.
    #[must_use]
    pub fn no_offerings_found(pair: CurrencyPair) -> Self {
        Self::NoOfferingsFound { pair }
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Returns true if retrying the same request might succeed.
    ///
    /// The core never retries on its own; callers decide.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }

    /// Returns true for the network failure class (network or timeout).
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }

    /// Returns a short stable name for the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network",
            Self::NoOfferingsFound { .. } => "no_offerings_found",
            Self::Timeout { .. } => "timeout",
            Self::Protocol { .. } => "protocol",
        }
    }
}

/// Result type for offering repository operations.
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(FetchError::network("reset").is_retryable());
        assert!(FetchError::timeout("slow").is_retryable());
        assert!(!FetchError::protocol("bad json").is_retryable());
        assert!(!FetchError::no_offerings_found(CurrencyPair::default()).is_retryable());
    }

    #[test]
    fn display_messages() {
        let err = FetchError::no_offerings_found(CurrencyPair::default());
        assert_eq!(err.to_string(), "no offerings found for GHS/USDC");
        assert_eq!(
            FetchError::network("refused").to_string(),
            "offering network error: refused"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(FetchError::timeout_with_duration("slow", 250)).unwrap();
        assert_eq!(json["kind"], "timeout");
        assert_eq!(json["timeout_ms"], 250);
        assert_eq!(FetchError::protocol("x").kind(), "protocol");
    }
}
