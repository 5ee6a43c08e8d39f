//! # Domain Entities
//!
//! - [`RawOffering`]: A provider's published rate for a pair
//! - [`Quote`]: Outcome of applying an offering to an amount
//! - [`RawCredential`], [`ClassifiedCredential`]: Identity credentials
//! - [`TokenBalance`]: A wallet holding valued in USD

pub mod balance;
pub mod credential;
pub mod offering;
pub mod quote;

pub use balance::TokenBalance;
pub use credential::{
    ClassifiedCredential, ClassifiedCredentials, RawCredential, UNKNOWN, UNVERIFIED_TITLE,
    VerifiedFields,
};
pub use offering::RawOffering;
pub use quote::Quote;
