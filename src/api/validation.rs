//! Field-level validation of request payloads.
//!
//! [`FieldValidator`] checks every field of a request and collects all
//! failures before reporting, so a caller sees every problem at once.
//! Keys are full paths (`transactions[2].mcc`); messages name the leaf
//! field (`mcc must be exactly 4 characters`).

use chrono::{DateTime, Utc};

use crate::domain::Mcc;
use crate::error::{FieldErrors, OffersError};

/// Collects per-field validation failures.
#[derive(Debug, Default)]
pub struct FieldValidator {
    errors: FieldErrors,
}

impl FieldValidator {
    /// Creates a validator with no recorded failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for `key`. The first failure per key is kept.
    pub fn reject(&mut self, key: &str, message: impl Into<String>) {
        self.errors
            .entry(key.to_string())
            .or_insert_with(|| message.into());
    }

    /// Requires a non-empty string. Whitespace counts as content.
    pub fn required(&mut self, key: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                self.reject(key, format!("{} is required", label(key)));
                None
            }
        }
    }

    /// Requires an integer in `1..=u32::MAX`.
    pub fn positive_u32(&mut self, key: &str, value: Option<i64>) -> Option<u32> {
        let v = self.positive(key, value)?;
        match u32::try_from(v) {
            Ok(v) => Some(v),
            Err(_) => {
                self.reject(key, format!("{} must be at most {}", label(key), u32::MAX));
                None
            }
        }
    }

    /// Requires an integer greater than zero.
    pub fn positive_u64(&mut self, key: &str, value: Option<i64>) -> Option<u64> {
        self.positive(key, value)
    }

    fn positive(&mut self, key: &str, value: Option<i64>) -> Option<u64> {
        let Some(v) = value else {
            self.reject(key, format!("{} is required", label(key)));
            return None;
        };
        match u64::try_from(v) {
            Ok(v) if v > 0 => Some(v),
            _ => {
                self.reject(key, format!("{} must be greater than 0", label(key)));
                None
            }
        }
    }

    /// Requires a 4-digit merchant category code.
    pub fn mcc(&mut self, key: &str, value: Option<String>) -> Option<Mcc> {
        let raw = self.required(key, value)?;
        match raw.parse::<Mcc>() {
            Ok(mcc) => Some(mcc),
            Err(err) => {
                self.reject(key, format!("{} {err}", label(key)));
                None
            }
        }
    }

    /// Requires an RFC 3339 timestamp, normalized to UTC.
    pub fn timestamp(&mut self, key: &str, value: Option<String>) -> Option<DateTime<Utc>> {
        let raw = self.required(key, value)?;
        match parse_timestamp(&raw) {
            Some(ts) => Some(ts),
            None => {
                self.reject(key, format!("{} must be an RFC 3339 timestamp", label(key)));
                None
            }
        }
    }

    /// Finishes validation.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::Validation`] carrying every recorded failure.
    pub fn finish(self) -> Result<(), OffersError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(OffersError::Validation(self.errors))
        }
    }
}

/// Parses an RFC 3339 timestamp and converts it to UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Leaf name of a field path: `transactions[0].mcc` → `mcc`,
/// `mcc_whitelist[2]` → `mcc_whitelist`.
fn label(key: &str) -> &str {
    let leaf = key.rsplit('.').next().unwrap_or(key);
    leaf.split('[').next().unwrap_or(leaf)
}
