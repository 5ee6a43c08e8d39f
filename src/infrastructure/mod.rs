//! # Infrastructure Layer
//!
//! Adapters behind the ports the application layer depends on.
//!
//! - [`offerings`]: Offering sources (HTTP, in-memory)
//! - [`credentials`]: Credential verifiers

pub mod credentials;
pub mod offerings;
