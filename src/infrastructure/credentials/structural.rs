//! # Structural Credential Verifier
//!
//! A [`CredentialVerifier`] that checks a credential's shape.
//!
//! A credential passes when it is a JSON document with an issuer, a subject
//! name, a country code and an RFC 3339 issuance date. When a trusted issuer
//! list is configured the issuer must also be on it. No signatures are
//! checked; cryptographic verifiers plug in through the same trait.

use crate::domain::entities::{RawCredential, VerifiedFields, credential::display_date};
use crate::infrastructure::credentials::traits::{
    CredentialVerifier, VerificationFailure, VerificationResult,
};
use async_trait::async_trait;
use chrono::DateTime;
use std::collections::HashSet;

/// Shape-checking verifier with an optional trusted issuer list.
#[derive(Debug, Clone, Default)]
pub struct StructuralVerifier {
    trusted_issuers: HashSet<String>,
}

impl StructuralVerifier {
    /// Creates a verifier accepting any issuer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts accepted issuers. An empty list accepts any issuer.
    #[must_use]
    pub fn with_trusted_issuers<I, S>(mut self, issuers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trusted_issuers = issuers.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if `issuer` is accepted.
    #[must_use]
    pub fn trusts(&self, issuer: &str) -> bool {
        self.trusted_issuers.is_empty() || self.trusted_issuers.contains(issuer)
    }

    /// Checks the credential synchronously.
    ///
    /// # Errors
    ///
    /// See [`VerificationFailure`].
    pub fn check(&self, raw: &RawCredential) -> VerificationResult<VerifiedFields> {
        if raw.document().is_none() {
            return Err(VerificationFailure::Unparseable);
        }

        let issuer = raw
            .issuer()
            .ok_or(VerificationFailure::MissingField("issuer"))?;
        let name = raw
            .subject_name()
            .ok_or(VerificationFailure::MissingField("subject name"))?;
        let country_code = raw
            .country_code()
            .ok_or(VerificationFailure::MissingField("country code"))?;
        let issued = raw
            .issuance_date()
            .ok_or(VerificationFailure::MissingField("issuance date"))?;

        if DateTime::parse_from_rfc3339(issued).is_err() {
            return Err(VerificationFailure::InvalidIssuanceDate(issued.to_string()));
        }
        if !self.trusts(issuer) {
            return Err(VerificationFailure::UntrustedIssuer(issuer.to_string()));
        }

        Ok(VerifiedFields {
            title: raw.credential_type().unwrap_or_default().to_string(),
            name: name.to_string(),
            country_code: country_code.to_string(),
            issuance_date: display_date(issued),
        })
    }
}

#[async_trait]
impl CredentialVerifier for StructuralVerifier {
    async fn verify(&self, raw: &RawCredential) -> VerificationResult<VerifiedFields> {
        self.check(raw)
    }

    fn name(&self) -> &'static str {
        "structural"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kcc() -> RawCredential {
        RawCredential::from(json!({
            "type": ["VerifiableCredential", "KnownCustomerCredential"],
            "issuer": "did:dht:issuer",
            "issuanceDate": "2024-03-09T12:00:00Z",
            "credentialSubject": {
                "id": "did:dht:alice",
                "name": "Alice Mensah",
                "countryOfResidence": "GH"
            }
        }))
    }

    #[tokio::test]
    async fn accepts_well_formed_credential() {
        let fields = StructuralVerifier::new().verify(&kcc()).await.unwrap();
        assert_eq!(fields.title, "KnownCustomerCredential");
        assert_eq!(fields.name, "Alice Mensah");
        assert_eq!(fields.country_code, "GH");
        assert_eq!(fields.issuance_date, "2024-03-09");
    }

    #[test]
    fn rejects_unparseable() {
        let raw = RawCredential::parse("eyJhbGciOi.not-json");
        assert_eq!(
            StructuralVerifier::new().check(&raw),
            Err(VerificationFailure::Unparseable)
        );
    }

    #[test]
    fn rejects_missing_fields() {
        let raw = RawCredential::from(json!({ "issuer": "did:dht:issuer" }));
        assert_eq!(
            StructuralVerifier::new().check(&raw),
            Err(VerificationFailure::MissingField("subject name"))
        );

        let raw = RawCredential::from(json!({ "subjectName": "Bob" }));
        assert_eq!(
            StructuralVerifier::new().check(&raw),
            Err(VerificationFailure::MissingField("issuer"))
        );
    }

    #[test]
    fn rejects_non_rfc3339_date() {
        let raw = RawCredential::from(json!({
            "issuer": "did:dht:issuer",
            "subjectName": "Bob",
            "countryCode": "KE",
            "issuanceDate": "March 9th"
        }));
        assert_eq!(
            StructuralVerifier::new().check(&raw),
            Err(VerificationFailure::InvalidIssuanceDate("March 9th".into()))
        );
    }

    #[test]
    fn trusted_issuers_are_enforced() {
        let verifier = StructuralVerifier::new().with_trusted_issuers(["did:dht:other"]);
        assert_eq!(
            verifier.check(&kcc()),
            Err(VerificationFailure::UntrustedIssuer("did:dht:issuer".into()))
        );

        let verifier = StructuralVerifier::new().with_trusted_issuers(["did:dht:issuer"]);
        assert!(verifier.check(&kcc()).is_ok());
        assert!(StructuralVerifier::new().trusts("anyone"));
    }

    #[test]
    fn missing_type_leaves_title_blank() {
        let raw = RawCredential::from(json!({
            "issuer": { "id": "did:dht:issuer" },
            "subjectName": "Bob",
            "countryCode": "KE",
            "validFrom": "2023-01-02T00:00:00+03:00"
        }));
        let fields = StructuralVerifier::new().check(&raw).unwrap();
        assert_eq!(fields.title, "");
        assert_eq!(fields.issuance_date, "2023-01-02");
    }
}
