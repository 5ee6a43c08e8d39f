//! # Domain Error
//!
//! The [`DomainError`] enum with numeric error codes.
//!
//! # Error Code Ranges
//!
//! - **1000-1999**: Validation errors
//! - **4000-4999**: Arithmetic errors

use crate::domain::value_objects::arithmetic::ArithmeticError;
use crate::domain::value_objects::currency::CurrencyCode;
use thiserror::Error;

/// Domain-level error with numeric error codes.
///
/// | Range | Category |
/// |-------|----------|
/// | 1000-1999 | Validation errors |
/// | 4000-4999 | Arithmetic errors |
///
/// # Examples
///
/// ```
/// use fiatsend_core::domain::errors::DomainError;
///
/// let error = DomainError::InvalidAmount("amount must not be negative".to_string());
/// assert_eq!(error.code(), 1001);
/// assert!(error.is_validation_error());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (1000-1999)
    // ========================================================================
    /// Input amount is non-numeric, negative, or non-finite.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Provider rate is non-positive, non-finite, or unparseable.
    #[error("invalid rate: {0}")]
    InvalidRate(String),

    /// Currency code outside the supported set.
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Both sides of a pair hold the same currency.
    #[error("currency pair must use two different currencies, got {0} on both sides")]
    SameCurrencyPair(CurrencyCode),

    /// Offering does not serve the requested pair.
    #[error("offering {offering_id} does not serve {expected}: {message}")]
    CurrencyMismatch {
        /// The offending offering.
        offering_id: String,
        /// The requested pair, rendered.
        expected: String,
        /// What the offering actually serves.
        message: String,
    },

    /// Generic validation error.
    #[error("validation error: {0}")]
    ValidationError(String),

    // ========================================================================
    // Arithmetic Errors (4000-4999)
    // ========================================================================
    /// Arithmetic overflow.
    #[error("arithmetic overflow")]
    Overflow,
}

impl DomainError {
    /// Returns the numeric error code.
    ///
    /// # Examples
    ///
    /// ```
    /// use fiatsend_core::domain::errors::DomainError;
    ///
    /// assert_eq!(DomainError::InvalidRate("zero".to_string()).code(), 1002);
    /// assert_eq!(DomainError::Overflow.code(), 4001);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::InvalidAmount(_) => 1001,
            Self::InvalidRate(_) => 1002,
            Self::UnsupportedCurrency(_) => 1003,
            Self::SameCurrencyPair(_) => 1004,
            Self::CurrencyMismatch { .. } => 1005,
            Self::ValidationError(_) => 1099,

            Self::Overflow => 4001,
        }
    }

    /// Returns the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.code() {
            1000..=1999 => "validation",
            4000..=4999 => "arithmetic",
            _ => "unknown",
        }
    }

    /// Returns true if this is a validation error.
    #[inline]
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self.code(), 1000..=1999)
    }

    /// Returns true if this is an arithmetic error.
    #[inline]
    #[must_use]
    pub const fn is_arithmetic_error(&self) -> bool {
        matches!(self.code(), 4000..=4999)
    }
}

impl From<ArithmeticError> for DomainError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::Overflow => Self::Overflow,
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
