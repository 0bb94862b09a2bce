//! Approved purchase events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Mcc;

/// An approved purchase attributed to a user.
///
/// Transactions are insert-only: the store deduplicates on `id` and never
/// updates or deletes a record once accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Caller-supplied unique identifier (deduplication key).
    pub id: String,
    /// Purchasing user.
    pub user_id: String,
    /// Merchant where the purchase happened.
    pub merchant_id: String,
    /// Category of the purchase.
    pub mcc: Mcc,
    /// Amount in minor units. Stored only; no rule reads it.
    pub amount_cents: u64,
    /// Approval instant.
    pub approved_at: DateTime<Utc>,
}
