//! Eligibility service: snapshots both stores and evaluates in memory.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::eligibility::evaluate;
use crate::domain::{EligibilityResult, OfferStore, TransactionStore};
use crate::error::OffersError;

/// Read path answering "which offers does this user qualify for now?".
///
/// Never mutates either store. The offer snapshot and the transaction
/// snapshot are two independent reads, so a write landing between them can
/// be reflected in one but not the other.
#[derive(Debug, Clone)]
pub struct EligibilityService {
    offers: Arc<dyn OfferStore>,
    transactions: Arc<dyn TransactionStore>,
}

impl EligibilityService {
    /// Creates a new `EligibilityService`.
    #[must_use]
    pub fn new(offers: Arc<dyn OfferStore>, transactions: Arc<dyn TransactionStore>) -> Self {
        Self {
            offers,
            transactions,
        }
    }

    /// Evaluates every active offer against the user's transactions at
    /// `now`.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::StoreUnavailable`] if either store cannot be
    /// read.
    pub fn eligible_offers(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<EligibilityResult, OffersError> {
        let offers = self.offers.all()?;
        let transactions = self.transactions.by_user(user_id)?;

        let result = evaluate(user_id, &offers, &transactions, now);
        tracing::debug!(
            user_id,
            %now,
            offers = offers.len(),
            transactions = transactions.len(),
            eligible = result.eligible_offers.len(),
            "eligibility evaluated"
        );
        Ok(result)
    }
}
