//! # Credential Verifier Trait
//!
//! Port definition for credential verification.
//!
//! A [`CredentialVerifier`] decides whether one raw credential is genuine
//! and, if so, which display fields it vouches for. Failures are per
//! credential and never abort a batch.

use crate::domain::entities::{RawCredential, VerifiedFields};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Why a credential did not verify.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationFailure {
    /// The record is not a credential document.
    #[error("credential could not be parsed")]
    Unparseable,

    /// A required field is absent or blank.
    #[error("credential is missing {0}")]
    MissingField(&'static str),

    /// The issuance date is not an RFC 3339 timestamp.
    #[error("invalid issuance date: {0}")]
    InvalidIssuanceDate(String),

    /// The issuer is not in the trusted set.
    #[error("untrusted issuer: {0}")]
    UntrustedIssuer(String),

    /// The verifier rejected the credential for another reason.
    #[error("credential rejected: {0}")]
    Rejected(String),
}

/// Result type for verification.
pub type VerificationResult<T> = Result<T, VerificationFailure>;

/// Verifies credentials.
#[async_trait]
pub trait CredentialVerifier: Send + Sync + fmt::Debug {
    /// Verifies one credential.
    ///
    /// # Errors
    ///
    /// Returns a [`VerificationFailure`] describing why the credential is
    /// not accepted.
    async fn verify(&self, raw: &RawCredential) -> VerificationResult<VerifiedFields>;

    /// Returns a short name for logging.
    fn name(&self) -> &'static str;
}
