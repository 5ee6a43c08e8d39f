//! # Identity Value Objects
//!
//! Type-safe identity wrappers.
//!
//! - [`OfferingId`] - String identifier assigned by the publishing provider
//! - [`RequestId`] - UUID identifying one quote or classification request

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Offering identifier.
///
/// Opaque string assigned by the liquidity provider that published the
/// offering (for tbDEX PFIs this is the `metadata.id` field).
///
/// # Examples
///
/// ```
/// use fiatsend_core::domain::value_objects::ids::OfferingId;
///
/// let id = OfferingId::new("offering_01hv22zfv1eptadkm92v278gh9");
/// assert_eq!(id.as_str(), "offering_01hv22zfv1eptadkm92v278gh9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferingId(String);

impl OfferingId {
    /// Creates a new offering ID from a string.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the offering ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OfferingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OfferingId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for OfferingId {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Request identifier.
///
/// Tags every quote or credential request so a result can be matched to the
/// request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Generates a new random request ID using UUID v4.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offering_id_conversions() {
        let a = OfferingId::from("offering-1");
        let b = OfferingId::from("offering-1".to_string());
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "offering-1");
    }

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(RequestId::new_v4(), RequestId::new_v4());
    }
}
