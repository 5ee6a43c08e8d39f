//! # Domain Services
//!
//! Pure business rules that don't naturally belong to a single entity.
//!
//! ## Services
//!
//! - [`quote_normalizer::QuoteNormalizer`]: Offering + amount into a quote
//! - [`portfolio::value_portfolio`]: USD valuation of wallet balances

pub mod portfolio;
pub mod quote_normalizer;

pub use portfolio::{BalanceLine, PortfolioValuation, value_portfolio};
pub use quote_normalizer::{FEE_RATE, QuoteNormalizer, normalize};
