//! Offer DTOs for upsert and list operations.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::validation::FieldValidator;
use crate::domain::{Mcc, Offer, OfferInput};
use crate::error::OffersError;

/// Request body for `POST /offers`.
///
/// Every field is optional at the JSON level so that missing values are
/// reported per field instead of as an opaque decode failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpsertOfferRequest {
    /// Offer id; generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Issuing merchant.
    #[serde(default)]
    pub merchant_id: Option<String>,
    /// 4-digit category codes that also count toward the offer.
    #[serde(default)]
    pub mcc_whitelist: Vec<String>,
    /// Operator switch.
    #[serde(default)]
    pub active: bool,
    /// Qualifying transactions required.
    #[serde(default)]
    pub min_txn_count: Option<i64>,
    /// Trailing window length in days.
    #[serde(default)]
    pub lookback_days: Option<i64>,
    /// Validity start (RFC 3339).
    #[serde(default)]
    pub starts_at: Option<String>,
    /// Validity end (RFC 3339).
    #[serde(default)]
    pub ends_at: Option<String>,
}

impl UpsertOfferRequest {
    /// Checks every field and converts the request into domain input.
    ///
    /// The `starts_at < ends_at` rule is not checked here; it belongs to
    /// offer creation.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::Validation`] listing every malformed field.
    pub fn validate(self) -> Result<OfferInput, OffersError> {
        let mut v = FieldValidator::new();

        let merchant_id = v.required("merchant_id", self.merchant_id);
        let mcc_whitelist: BTreeSet<Mcc> = self
            .mcc_whitelist
            .into_iter()
            .enumerate()
            .filter_map(|(i, code)| v.mcc(&format!("mcc_whitelist[{i}]"), Some(code)))
            .collect();
        let min_txn_count = v.positive_u32("min_txn_count", self.min_txn_count);
        let lookback_days = v.positive_u32("lookback_days", self.lookback_days);
        let starts_at = v.timestamp("starts_at", self.starts_at);
        let ends_at = v.timestamp("ends_at", self.ends_at);

        v.finish()?;

        let (
            Some(merchant_id),
            Some(min_txn_count),
            Some(lookback_days),
            Some(starts_at),
            Some(ends_at),
        ) = (merchant_id, min_txn_count, lookback_days, starts_at, ends_at)
        else {
            return Err(OffersError::Internal(
                "offer fields missing after validation".to_string(),
            ));
        };

        Ok(OfferInput {
            id: self.id,
            merchant_id,
            mcc_whitelist,
            active: self.active,
            min_txn_count,
            lookback_days,
            starts_at,
            ends_at,
        })
    }
}

/// A stored offer, as returned by `POST /offers` and `GET /offers`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OfferResponse {
    /// Offer identifier.
    pub id: String,
    /// Issuing merchant.
    pub merchant_id: String,
    /// Whitelisted category codes, sorted.
    pub mcc_whitelist: Vec<String>,
    /// Operator switch.
    pub active: bool,
    /// Qualifying transactions required.
    pub min_txn_count: u32,
    /// Trailing window length in days.
    pub lookback_days: u32,
    /// Validity start.
    pub starts_at: DateTime<Utc>,
    /// Validity end.
    pub ends_at: DateTime<Utc>,
}

impl From<Offer> for OfferResponse {
    fn from(offer: Offer) -> Self {
        Self {
            id: offer.id.into(),
            merchant_id: offer.merchant_id,
            mcc_whitelist: offer.mcc_whitelist.into_iter().map(String::from).collect(),
            active: offer.active,
            min_txn_count: offer.min_txn_count,
            lookback_days: offer.lookback_days,
            starts_at: offer.starts_at,
            ends_at: offer.ends_at,
        }
    }
}

/// Response body for `GET /offers`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OfferListResponse {
    /// Stored offers, ordered by id.
    pub data: Vec<OfferResponse>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn valid_request() -> UpsertOfferRequest {
        UpsertOfferRequest {
            id: Some("offer-1".to_string()),
            merchant_id: Some("merchant-1".to_string()),
            mcc_whitelist: vec!["5812".to_string(), "5814".to_string(), "5812".to_string()],
            active: true,
            min_txn_count: Some(3),
            lookback_days: Some(30),
            starts_at: Some("2025-10-01T00:00:00Z".to_string()),
            ends_at: Some("2025-11-01T00:00:00Z".to_string()),
        }
    }

    #[test]
    fn valid_request_converts() {
        let Ok(input) = valid_request().validate() else {
            panic!("valid request rejected");
        };
        assert_eq!(input.id.as_deref(), Some("offer-1"));
        assert_eq!(input.mcc_whitelist.len(), 2);
        assert_eq!(input.min_txn_count, 3);
    }

    #[test]
    fn empty_whitelist_is_allowed() {
        let mut req = valid_request();
        req.mcc_whitelist.clear();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn reports_every_bad_field() {
        let req = UpsertOfferRequest {
            mcc_whitelist: vec!["58".to_string()],
            min_txn_count: Some(0),
            starts_at: Some("not a date".to_string()),
            ..UpsertOfferRequest::default()
        };
        let Err(OffersError::Validation(fields)) = req.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            fields.get("merchant_id").map(String::as_str),
            Some("merchant_id is required")
        );
        assert_eq!(
            fields.get("mcc_whitelist[0]").map(String::as_str),
            Some("mcc_whitelist must be exactly 4 characters")
        );
        assert_eq!(
            fields.get("min_txn_count").map(String::as_str),
            Some("min_txn_count must be greater than 0")
        );
        assert_eq!(
            fields.get("lookback_days").map(String::as_str),
            Some("lookback_days is required")
        );
        assert!(fields.contains_key("starts_at"));
        assert!(fields.contains_key("ends_at"));
    }

    #[test]
    fn inverted_window_passes_field_validation() {
        let mut req = valid_request();
        req.starts_at = Some("2025-12-01T00:00:00Z".to_string());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn response_lists_codes_sorted() {
        let Ok(input) = valid_request().validate() else {
            panic!("valid request rejected");
        };
        let Ok(offer) = Offer::create(input) else {
            panic!("offer rejected");
        };
        let response = OfferResponse::from(offer);
        assert_eq!(response.id, "offer-1");
        assert_eq!(response.mcc_whitelist, vec!["5812", "5814"]);
    }
}
