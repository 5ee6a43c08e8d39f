//! # Credential Entities
//!
//! Raw identity credentials held by the wallet and their classified view.
//!
//! - [`RawCredential`]: an external record, either a JSON document or
//!   something that could not be parsed at all
//! - [`VerifiedFields`]: display fields vouched for by a verifier
//! - [`ClassifiedCredential`]: what the presentation layer renders
//! - [`ClassifiedCredentials`]: an ordered batch with verified/unverified views
//!
//! Display fields are never blank: anything missing renders as
//! [`UNKNOWN`].

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Marker rendered in place of a missing display field.
pub const UNKNOWN: &str = "unknown";

/// Title given to every credential that failed verification.
pub const UNVERIFIED_TITLE: &str = "Unverified";

/// A credential record as received from the wallet store.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCredential {
    /// A parsed JSON credential document.
    Document(Value),
    /// Input that is not a JSON object, kept verbatim.
    Unparseable(String),
}

impl RawCredential {
    /// Parses a credential from its serialized form.
    ///
    /// Never fails: input that is not a JSON object becomes
    /// [`RawCredential::Unparseable`].
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match serde_json::from_str::<Value>(input) {
            Ok(value @ Value::Object(_)) => Self::Document(value),
            _ => Self::Unparseable(input.to_string()),
        }
    }

    /// Returns the JSON document, if this credential parsed.
    #[must_use]
    pub fn document(&self) -> Option<&Value> {
        match self {
            Self::Document(value) => Some(value),
            Self::Unparseable(_) => None,
        }
    }

    /// Returns the issuer identifier (`issuer` or `issuer.id`).
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        let issuer = self.document()?.get("issuer")?;
        match issuer {
            Value::String(s) => non_blank(s),
            Value::Object(map) => map.get("id").and_then(Value::as_str).and_then(non_blank),
            _ => None,
        }
    }

    /// Returns the credential's most specific type, the last entry of `type`.
    #[must_use]
    pub fn credential_type(&self) -> Option<&str> {
        match self.document()?.get("type")? {
            Value::String(s) => non_blank(s),
            Value::Array(types) => types.iter().rev().find_map(|t| t.as_str().and_then(non_blank)),
            _ => None,
        }
    }

    /// Returns the subject's name.
    #[must_use]
    pub fn subject_name(&self) -> Option<&str> {
        self.subject_field("name")
            .or_else(|| self.top_level_field("subjectName"))
    }

    /// Returns the subject's country code.
    #[must_use]
    pub fn country_code(&self) -> Option<&str> {
        self.subject_field("countryOfResidence")
            .or_else(|| self.subject_field("countryCode"))
            .or_else(|| self.top_level_field("countryCode"))
    }

    /// Returns the issuance date as written in the document.
    #[must_use]
    pub fn issuance_date(&self) -> Option<&str> {
        self.top_level_field("issuanceDate")
            .or_else(|| self.top_level_field("validFrom"))
    }

    fn top_level_field(&self, key: &str) -> Option<&str> {
        self.document()?.get(key)?.as_str().and_then(non_blank)
    }

    fn subject_field(&self, key: &str) -> Option<&str> {
        self.document()?
            .get("credentialSubject")?
            .get(key)?
            .as_str()
            .and_then(non_blank)
    }
}

impl From<Value> for RawCredential {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(_) => Self::Document(value),
            Value::String(s) => Self::parse(&s),
            other => Self::Unparseable(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for RawCredential {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Formats an issuance date for display.
///
/// RFC 3339 timestamps are shown as `YYYY-MM-DD`; anything else is shown
/// as written.
#[must_use]
pub fn display_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Display fields produced by a successful verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedFields {
    /// Credential title, usually its type.
    pub title: String,
    /// Subject name.
    pub name: String,
    /// Subject country code.
    pub country_code: String,
    /// Issuance date for display.
    pub issuance_date: String,
}

/// A credential reconciled into its display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedCredential {
    title: String,
    name: String,
    country_code: String,
    issuance_date: String,
    verified: bool,
}

impl ClassifiedCredential {
    /// Builds a verified credential from verifier output.
    ///
    /// Blank fields are still replaced with [`UNKNOWN`].
    #[must_use]
    pub fn verified(fields: VerifiedFields) -> Self {
        Self {
            title: or_unknown(Some(fields.title.as_str())),
            name: or_unknown(Some(fields.name.as_str())),
            country_code: or_unknown(Some(fields.country_code.as_str())),
            issuance_date: or_unknown(Some(fields.issuance_date.as_str())),
            verified: true,
        }
    }

    /// Builds an unverified credential with best-effort display fields.
    #[must_use]
    pub fn unverified(raw: &RawCredential) -> Self {
        Self {
            title: UNVERIFIED_TITLE.to_string(),
            name: or_unknown(raw.subject_name()),
            country_code: or_unknown(raw.country_code()),
            issuance_date: raw
                .issuance_date()
                .map_or_else(|| UNKNOWN.to_string(), display_date),
            verified: false,
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the subject name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the subject country code.
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Returns the issuance date.
    #[must_use]
    pub fn issuance_date(&self) -> &str {
        &self.issuance_date
    }

    /// Returns true if the credential passed verification.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.verified
    }
}

fn or_unknown(value: Option<&str>) -> String {
    value
        .and_then(non_blank)
        .unwrap_or(UNKNOWN)
        .to_string()
}

impl fmt::Display for ClassifiedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.verified { "verified" } else { "unverified" };
        write!(
            f,
            "{} ({}, {}, issued {}) [{}]",
            self.title, self.name, self.country_code, self.issuance_date, status
        )
    }
}

/// An ordered batch of classified credentials.
///
/// Verified and unverified are filtered views over the same list; neither
/// reorders it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassifiedCredentials(Vec<ClassifiedCredential>);

impl ClassifiedCredentials {
    /// Wraps an already-ordered list.
    #[must_use]
    pub fn new(items: Vec<ClassifiedCredential>) -> Self {
        Self(items)
    }

    /// Returns all credentials in input order.
    #[must_use]
    pub fn all(&self) -> &[ClassifiedCredential] {
        &self.0
    }

    /// Returns the verified credentials in input order.
    pub fn verified(&self) -> impl Iterator<Item = &ClassifiedCredential> {
        self.0.iter().filter(|c| c.verified)
    }

    /// Returns the unverified credentials in input order.
    pub fn unverified(&self) -> impl Iterator<Item = &ClassifiedCredential> {
        self.0.iter().filter(|c| !c.verified)
    }

    /// Returns the number of credentials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no credentials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the batch and returns the inner list.
    #[must_use]
    pub fn into_inner(self) -> Vec<ClassifiedCredential> {
        self.0
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
            "issuanceDate": "2024-05-04T10:11:12Z",
            "credentialSubject": {
                "id": "did:dht:alice",
                "name": "Alice Mensah",
                "countryOfResidence": "GH"
            }
        }))
    }

    #[test]
    fn extracts_fields_from_document() {
        let raw = kcc();
        assert_eq!(raw.issuer(), Some("did:dht:issuer"));
        assert_eq!(raw.credential_type(), Some("KnownCustomerCredential"));
        assert_eq!(raw.subject_name(), Some("Alice Mensah"));
        assert_eq!(raw.country_code(), Some("GH"));
        assert_eq!(raw.issuance_date(), Some("2024-05-04T10:11:12Z"));
    }

    #[test]
    fn issuer_object_form() {
        let raw = RawCredential::from(json!({ "issuer": { "id": "did:web:bank" } }));
        assert_eq!(raw.issuer(), Some("did:web:bank"));
    }

    #[test]
    fn falls_back_to_flat_fields() {
        let raw = RawCredential::from(json!({
            "subjectName": "Kofi",
            "countryCode": "KE",
            "validFrom": "2023-01-01"
        }));
        assert_eq!(raw.subject_name(), Some("Kofi"));
        assert_eq!(raw.country_code(), Some("KE"));
        assert_eq!(raw.issuance_date(), Some("2023-01-01"));
    }

    #[test]
    fn parse_keeps_garbage_verbatim() {
        let raw = RawCredential::parse("eyJhbGciOi.not-json");
        assert_eq!(raw, RawCredential::Unparseable("eyJhbGciOi.not-json".to_string()));
        assert!(raw.subject_name().is_none());
    }

    #[test]
    fn deserialize_string_holding_json() {
        let raw: RawCredential =
            serde_json::from_str(r#""{\"credentialSubject\":{\"name\":\"Ama\"}}""#).unwrap();
        assert_eq!(raw.subject_name(), Some("Ama"));
    }

    #[test]
    fn unverified_uses_unknown_marker() {
        let classified = ClassifiedCredential::unverified(&RawCredential::parse("[1,2]"));
        assert_eq!(classified.title(), UNVERIFIED_TITLE);
        assert_eq!(classified.name(), UNKNOWN);
        assert_eq!(classified.country_code(), UNKNOWN);
        assert_eq!(classified.issuance_date(), UNKNOWN);
        assert!(!classified.is_verified());
    }

    #[test]
    fn unverified_keeps_best_effort_fields() {
        let classified = ClassifiedCredential::unverified(&kcc());
        assert_eq!(classified.name(), "Alice Mensah");
        assert_eq!(classified.issuance_date(), "2024-05-04");
    }

    #[test]
    fn verified_blank_fields_become_unknown() {
        let classified = ClassifiedCredential::verified(VerifiedFields {
            title: "KnownCustomerCredential".to_string(),
            name: "  ".to_string(),
            country_code: "GH".to_string(),
            issuance_date: String::new(),
        });
        assert!(classified.is_verified());
        assert_eq!(classified.name(), UNKNOWN);
        assert_eq!(classified.issuance_date(), UNKNOWN);
    }

    #[test]
    fn display_date_handles_both_forms() {
        assert_eq!(display_date("2024-05-04T23:59:59+02:00"), "2024-05-04");
        assert_eq!(display_date("May 2024"), "May 2024");
    }

    #[test]
    fn views_preserve_order() {
        let batch = ClassifiedCredentials::new(vec![
            ClassifiedCredential::unverified(&RawCredential::parse("x")),
            ClassifiedCredential::verified(VerifiedFields {
                title: "A".to_string(),
                name: "n".to_string(),
                country_code: "GH".to_string(),
                issuance_date: "2024-01-01".to_string(),
            }),
            ClassifiedCredential::unverified(&kcc()),
        ]);

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.verified().count(), 1);
        let unverified: Vec<_> = batch.unverified().map(|c| c.name()).collect();
        assert_eq!(unverified, vec![UNKNOWN, "Alice Mensah"]);
    }
}
