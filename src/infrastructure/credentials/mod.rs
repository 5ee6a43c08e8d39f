//! # Credentials
//!
//! The credential verifier port and the built-in structural verifier.

pub mod structural;
pub mod traits;

pub use structural::StructuralVerifier;
pub use traits::{CredentialVerifier, VerificationFailure, VerificationResult};
