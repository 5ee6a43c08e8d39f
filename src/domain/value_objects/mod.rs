//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`OfferingId`]: Provider-assigned offering identifier
//! - [`RequestId`]: UUID tagging a single request
//!
//! ## Numeric Types
//!
//! - [`Amount`]: Non-negative user input amount
//! - [`Rate`]: Strictly positive payout-per-payin rate
//!
//! ## Currency
//!
//! - [`CurrencyCode`]: Supported currencies
//! - [`CurrencyPair`]: Validated `from -> to` pair
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`], [`CheckedArithmetic`], [`round_currency`]

pub mod amount;
pub mod arithmetic;
pub mod currency;
pub mod ids;
pub mod rate;

pub use amount::Amount;
pub use arithmetic::{
    ArithmeticError, ArithmeticResult, CURRENCY_SCALE, CheckedArithmetic, round_currency,
    round_half_up,
};
pub use currency::{CurrencyCode, CurrencyPair};
pub use ids::{OfferingId, RequestId};
pub use rate::Rate;
