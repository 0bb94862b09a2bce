//! Merchant-issued offers.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Mcc, OfferId};
use crate::error::OffersError;

/// A promotional rule issued by a merchant.
///
/// An offer is considered only while its `active` flag is set and the
/// reference instant lies within `[starts_at, ends_at]`. A user qualifies
/// once they have at least `min_txn_count` matching transactions in the
/// trailing `lookback_days` days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    /// Unique offer identifier.
    pub id: OfferId,
    /// Issuing merchant.
    pub merchant_id: String,
    /// Category codes that also count toward the offer.
    pub mcc_whitelist: BTreeSet<Mcc>,
    /// Operator switch, independent of the date window.
    pub active: bool,
    /// Qualifying transactions required.
    pub min_txn_count: u32,
    /// Length of the trailing window, in calendar days.
    pub lookback_days: u32,
    /// First instant the offer is valid (inclusive).
    pub starts_at: DateTime<Utc>,
    /// Last instant the offer is valid (inclusive).
    pub ends_at: DateTime<Utc>,
}

/// Structurally valid offer fields as received from a caller.
///
/// `id` is optional; a missing identifier is generated on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferInput {
    /// Caller-supplied identifier, if any.
    pub id: Option<String>,
    /// Issuing merchant.
    pub merchant_id: String,
    /// Category codes that also count toward the offer.
    pub mcc_whitelist: BTreeSet<Mcc>,
    /// Operator switch.
    pub active: bool,
    /// Qualifying transactions required (positive).
    pub min_txn_count: u32,
    /// Trailing window in days (positive).
    pub lookback_days: u32,
    /// Validity start.
    pub starts_at: DateTime<Utc>,
    /// Validity end.
    pub ends_at: DateTime<Utc>,
}

impl Offer {
    /// Builds an offer from validated input, resolving its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::BusinessRule`] if `starts_at` is not strictly
    /// before `ends_at`.
    pub fn create(input: OfferInput) -> Result<Self, OffersError> {
        if input.starts_at >= input.ends_at {
            return Err(OffersError::business_rule(
                "starts_at",
                "starts_at must be before ends_at",
            ));
        }
        Ok(Self {
            id: OfferId::resolve(input.id),
            merchant_id: input.merchant_id,
            mcc_whitelist: input.mcc_whitelist,
            active: input.active,
            min_txn_count: input.min_txn_count,
            lookback_days: input.lookback_days,
            starts_at: input.starts_at,
            ends_at: input.ends_at,
        })
    }

    /// Human-readable justification reported for an eligible offer.
    #[must_use]
    pub fn eligibility_reason(&self) -> String {
        format!(
            ">= {} transactions in last {} days",
            self.min_txn_count, self.lookback_days
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn reference_now() -> DateTime<Utc> {
        let Some(now) = Utc.with_ymd_and_hms(2025, 10, 21, 10, 0, 0).single() else {
            panic!("valid timestamp");
        };
        now
    }

    fn input(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> OfferInput {
        OfferInput {
            id: None,
            merchant_id: "merchant-1".to_string(),
            mcc_whitelist: BTreeSet::new(),
            active: true,
            min_txn_count: 3,
            lookback_days: 30,
            starts_at,
            ends_at,
        }
    }

    #[test]
    fn create_generates_missing_id() {
        let now = reference_now();
        let Ok(offer) = Offer::create(input(now, now + Duration::days(1))) else {
            panic!("valid offer rejected");
        };
        assert_eq!(offer.id.as_str().len(), 36);
    }

    #[test]
    fn create_keeps_supplied_id() {
        let now = reference_now();
        let mut req = input(now, now + Duration::days(1));
        req.id = Some("offer-1".to_string());
        let Ok(offer) = Offer::create(req) else {
            panic!("valid offer rejected");
        };
        assert_eq!(offer.id.as_str(), "offer-1");
    }

    #[test]
    fn create_rejects_inverted_or_empty_window() {
        let now = reference_now();
        let equal = Offer::create(input(now, now));
        assert!(matches!(equal, Err(OffersError::BusinessRule { .. })));

        let inverted = Offer::create(input(now, now - Duration::seconds(1)));
        let Err(OffersError::BusinessRule { field, message }) = inverted else {
            panic!("expected business rule violation");
        };
        assert_eq!(field, "starts_at");
        assert_eq!(message, "starts_at must be before ends_at");
    }

    #[test]
    fn reason_embeds_threshold_and_window() {
        let now = reference_now();
        let Ok(offer) = Offer::create(input(now, now + Duration::days(1))) else {
            panic!("valid offer rejected");
        };
        assert_eq!(
            offer.eligibility_reason(),
            ">= 3 transactions in last 30 days"
        );
    }
}
