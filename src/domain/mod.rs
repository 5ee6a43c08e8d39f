//! # Domain Layer
//!
//! Value objects, entities, errors and pure services for quotes,
//! offerings, credentials and balances. Nothing in here performs I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
