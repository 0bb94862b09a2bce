//! Eligibility evaluation over in-memory snapshots.
//!
//! The pipeline is: active-offer filter → per-offer count of matching
//! transactions inside the lookback window → threshold check → reason.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::rules::{in_window, is_active, lookback_start, matches};
use super::{Offer, OfferId, Transaction};

/// One offer the user currently qualifies for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibleOffer {
    /// The qualifying offer.
    pub offer_id: OfferId,
    /// Why the user qualifies, e.g. `">= 3 transactions in last 30 days"`.
    pub reason: String,
}

/// Offers a user qualifies for at a reference instant. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityResult {
    /// The evaluated user.
    pub user_id: String,
    /// Qualifying offers, ordered by offer id.
    pub eligible_offers: Vec<EligibleOffer>,
}

/// Counts the transactions that fall inside the offer's lookback window
/// ending at `now` and match the offer.
#[must_use]
pub fn qualifying_count(offer: &Offer, transactions: &[Transaction], now: DateTime<Utc>) -> usize {
    let start = lookback_start(now, offer.lookback_days);
    transactions
        .iter()
        .filter(|txn| in_window(txn, start, now) && matches(txn, offer))
        .count()
}

/// Evaluates every offer against the user's transactions.
///
/// `transactions` is expected to hold only the user's own records; offers
/// that are inactive at `now` are skipped. Each eligible offer is reported
/// independently, with its configured threshold and window in the reason
/// rather than the observed count.
#[must_use]
pub fn evaluate(
    user_id: &str,
    offers: &[Offer],
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> EligibilityResult {
    let mut eligible_offers: Vec<EligibleOffer> = offers
        .iter()
        .filter(|offer| is_active(offer, now))
        .filter(|offer| {
            let count = qualifying_count(offer, transactions, now);
            u64::try_from(count).unwrap_or(u64::MAX) >= u64::from(offer.min_txn_count)
        })
        .map(|offer| EligibleOffer {
            offer_id: offer.id.clone(),
            reason: offer.eligibility_reason(),
        })
        .collect();
    eligible_offers.sort_by(|a, b| a.offer_id.cmp(&b.offer_id));

    EligibilityResult {
        user_id: user_id.to_string(),
        eligible_offers,
    }
}
