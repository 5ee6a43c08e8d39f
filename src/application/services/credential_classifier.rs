//! # Credential Classifier
//!
//! Reconciles raw credentials into a verified/unverified view.
//!
//! Every credential goes through the [`CredentialVerifier`] port. A failure
//! only affects its own credential, which is kept with the
//! [`UNVERIFIED_TITLE`](crate::domain::entities::UNVERIFIED_TITLE) title and
//! best-effort fields. Output order always matches input order.
//!
//! [`CredentialBoard`] runs classification once per input change and keeps
//! the resolved list available for synchronous reads.

use crate::application::services::request_gate::{Published, RequestGate, RequestStatus};
use crate::domain::entities::{
    ClassifiedCredential, ClassifiedCredentials, RawCredential, VerifiedFields,
};
use crate::infrastructure::credentials::traits::{CredentialVerifier, VerificationResult};
use futures::future::join_all;
use std::sync::Arc;

/// Maps one verification outcome onto its display form.
#[must_use]
pub fn classify_outcome(
    raw: &RawCredential,
    outcome: VerificationResult<VerifiedFields>,
) -> ClassifiedCredential {
    match outcome {
        Ok(fields) => ClassifiedCredential::verified(fields),
        Err(failure) => {
            tracing::debug!(error = %failure, "credential failed verification");
            ClassifiedCredential::unverified(raw)
        }
    }
}

/// Verifies every credential and classifies the results in input order.
pub async fn classify_credentials(
    raw: &[RawCredential],
    verifier: &dyn CredentialVerifier,
) -> ClassifiedCredentials {
    let outcomes = join_all(raw.iter().map(|credential| verifier.verify(credential))).await;

    let classified = raw
        .iter()
        .zip(outcomes)
        .map(|(credential, outcome)| classify_outcome(credential, outcome))
        .collect();

    ClassifiedCredentials::new(classified)
}

/// Holds the classified credentials for the current input.
#[derive(Debug)]
pub struct CredentialBoard {
    verifier: Arc<dyn CredentialVerifier>,
    gate: RequestGate,
    current: Published<ClassifiedCredentials>,
    empty: Arc<ClassifiedCredentials>,
}

impl CredentialBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            verifier,
            gate: RequestGate::new(),
            current: Published::new(),
            empty: Arc::new(ClassifiedCredentials::default()),
        }
    }

    /// Classifies `raw` and publishes the result.
    ///
    /// A refresh started later supersedes this one.
    #[tracing::instrument(skip(self, raw), fields(count = raw.len()))]
    pub async fn refresh(&self, raw: Vec<RawCredential>) -> RequestStatus<ClassifiedCredentials> {
        let mut ticket = self.gate.begin();
        let Some(classified) = ticket
            .run(classify_credentials(&raw, self.verifier.as_ref()))
            .await
        else {
            return RequestStatus::Superseded;
        };

        let classified = Arc::new(classified);
        if self.current.publish(&ticket, Arc::clone(&classified)) {
            tracing::info!(
                verified = classified.verified().count(),
                unverified = classified.unverified().count(),
                "published credentials"
            );
            RequestStatus::Published(classified)
        } else {
            RequestStatus::Superseded
        }
    }

    /// Returns the latest classified list, empty before the first refresh.
    #[must_use]
    pub fn current(&self) -> Arc<ClassifiedCredentials> {
        self.current
            .get()
            .unwrap_or_else(|| Arc::clone(&self.empty))
    }
}
