//! Offer service: creates or replaces offers and lists them.

use std::sync::Arc;

use crate::domain::{Offer, OfferInput, OfferStore};
use crate::error::OffersError;

/// Write path for offers.
///
/// Enforces the creation-time business rule (`starts_at < ends_at`) and
/// resolves the identifier before handing the offer to the store.
#[derive(Debug, Clone)]
pub struct OfferService {
    store: Arc<dyn OfferStore>,
}

impl OfferService {
    /// Creates a new `OfferService`.
    #[must_use]
    pub fn new(store: Arc<dyn OfferStore>) -> Self {
        Self { store }
    }

    /// Creates or wholesale replaces an offer, returning what was stored.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::BusinessRule`] if the validity window is
    /// empty or inverted, or [`OffersError::StoreUnavailable`] if the store
    /// rejects the write.
    pub fn upsert_offer(&self, input: OfferInput) -> Result<Offer, OffersError> {
        let offer = Offer::create(input)?;
        self.store.upsert(offer.clone())?;
        tracing::info!(
            offer_id = %offer.id,
            merchant_id = %offer.merchant_id,
            active = offer.active,
            "offer upserted"
        );
        Ok(offer)
    }

    /// Returns every stored offer, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::StoreUnavailable`] if the store cannot be read.
    pub fn list_offers(&self) -> Result<Vec<Offer>, OffersError> {
        let mut offers = self.store.all()?;
        offers.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(offers)
    }

    /// Number of stored offers.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::StoreUnavailable`] if the store cannot be read.
    pub fn offer_count(&self) -> Result<usize, OffersError> {
        self.store.count()
    }
}
