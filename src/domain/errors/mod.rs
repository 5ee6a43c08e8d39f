//! # Domain Errors
//!
//! Typed error types for domain operations.
//!
//! Error codes are organized by category:
//! - 1000-1999: Validation errors
//! - 4000-4999: Arithmetic errors
//!
//! # Examples
//!
//! ```
//! use fiatsend_core::domain::errors::{DomainError, DomainResult};
//!
//! fn require_positive(rate: f64) -> DomainResult<f64> {
//!     if rate <= 0.0 {
//!         return Err(DomainError::InvalidRate("rate must be positive".to_string()));
//!     }
//!     Ok(rate)
//! }
//!
//! assert!(require_positive(0.0).is_err());
//! ```

pub mod domain_error;

pub use domain_error::{DomainError, DomainResult};
