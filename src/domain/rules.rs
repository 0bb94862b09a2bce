//! Pure eligibility rules.
//!
//! None of these functions touch a store or the clock; the reference
//! instant is always passed in by the caller.

use chrono::{DateTime, Days, Utc};

use super::{Offer, Transaction};

/// Returns `true` if the offer is switched on and `now` lies within its
/// validity window. Both bounds are inclusive.
#[must_use]
pub fn is_active(offer: &Offer, now: DateTime<Utc>) -> bool {
    offer.active && now >= offer.starts_at && now <= offer.ends_at
}

/// Returns `true` if the transaction counts toward the offer: it happened
/// at the offer's merchant, or its category is whitelisted.
#[must_use]
pub fn matches(transaction: &Transaction, offer: &Offer) -> bool {
    transaction.merchant_id == offer.merchant_id
        || offer.mcc_whitelist.contains(&transaction.mcc)
}

/// Start of the trailing window of `lookback_days` calendar days ending at
/// `now`.
///
/// The subtraction is instant-level: time of day is preserved, not
/// truncated to midnight. Saturates to the earliest representable instant.
#[must_use]
pub fn lookback_start(now: DateTime<Utc>, lookback_days: u32) -> DateTime<Utc> {
    now.checked_sub_days(Days::new(u64::from(lookback_days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Returns `true` if the transaction was approved within `[start, now]`.
#[must_use]
pub fn in_window(transaction: &Transaction, start: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    transaction.approved_at >= start && transaction.approved_at <= now
}
