//! # Fiatsend Core
//!
//! Quote aggregation, best-offer selection and credential classification
//! for the Fiatsend wallet dashboard.
//!
//! ## Architecture
//!
//! This crate follows Domain-Driven Design with a layered architecture:
//!
//! - **Domain Layer** (`domain`): Value objects, entities, quote normalization
//! - **Application Layer** (`application`): Ranking, aggregation, sessions, credential classification
//! - **Infrastructure Layer** (`infrastructure`): Offering repositories and credential verifiers
//!
//! ## Example
//!
//! ```
//! use fiatsend_core::application::services::compute_quotes;
//! use fiatsend_core::domain::entities::RawOffering;
//! use fiatsend_core::domain::value_objects::{CurrencyCode, CurrencyPair};
//!
//! let offerings = vec![
//!     RawOffering::new("o-1", "Vertex", CurrencyCode::Ghs, CurrencyCode::Usdc, "1.1"),
//!     RawOffering::new("o-2", "Aqua", CurrencyCode::Ghs, CurrencyCode::Usdc, "1.2"),
//! ];
//!
//! let ranked = compute_quotes(CurrencyPair::default(), "50".parse().unwrap(), &offerings);
//!
//! assert_eq!(ranked[0].quote.provider(), "Aqua");
//! assert_eq!(ranked[0].quote.received_display(), "60.00 USDC");
//! assert!(ranked[0].is_best_return);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
