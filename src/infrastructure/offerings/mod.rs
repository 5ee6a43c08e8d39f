//! # Offerings
//!
//! Offering sources: the repository port, its errors, the PFI wire format,
//! and the HTTP and in-memory implementations.

pub mod error;
pub mod http_repository;
pub mod in_memory;
pub mod traits;
pub mod wire;

pub use error::{FetchError, FetchResult};
pub use http_repository::HttpOfferingRepository;
pub use in_memory::InMemoryOfferingRepository;
pub use traits::OfferingRepository;
pub use wire::{OfferingRecord, OfferingsEnvelope};
