//! Type-safe offer identifier.
//!
//! [`OfferId`] is a newtype wrapper around an opaque string so offer
//! identifiers cannot be confused with merchant, user, or transaction ids.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for an offer.
///
/// Callers may supply their own identifier on upsert; when they do not, a
/// UUID v4 string is generated. Used as the key in the offer store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(String);

impl OfferId {
    /// Creates a new random `OfferId` (UUID v4).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Uses the supplied identifier, or generates one when it is absent or empty.
    #[must_use]
    pub fn resolve(supplied: Option<String>) -> Self {
        match supplied {
            Some(id) if !id.is_empty() => Self(id),
            _ => Self::generate(),
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OfferId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OfferId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<OfferId> for String {
    fn from(id: OfferId) -> Self {
        id.0
    }
}
