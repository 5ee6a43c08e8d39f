//! # Application Layer
//!
//! Orchestration on top of the domain: ranking, quote aggregation,
//! last-request-wins sessions and credential classification.

pub mod services;
