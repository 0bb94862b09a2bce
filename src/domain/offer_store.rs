//! Concurrent offer storage keyed by offer id.
//!
//! [`InMemoryOfferStore`] keeps every offer in a `HashMap` behind a single
//! [`std::sync::RwLock`]: snapshots proceed concurrently with each other,
//! upserts are exclusive.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

use super::{Offer, OfferId};
use crate::error::OffersError;

/// Keyed collection of offers.
pub trait OfferStore: Send + Sync + Debug {
    /// Stores `offer`, replacing any offer with the same id in full.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::StoreUnavailable`] if the store cannot be
    /// written.
    fn upsert(&self, offer: Offer) -> Result<(), OffersError>;

    /// Returns a point-in-time copy of every stored offer, in no particular
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::StoreUnavailable`] if the store cannot be read.
    fn all(&self) -> Result<Vec<Offer>, OffersError>;

    /// Returns the number of stored offers.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::StoreUnavailable`] if the store cannot be read.
    fn count(&self) -> Result<usize, OffersError>;
}

/// In-process offer store.
#[derive(Debug, Default)]
pub struct InMemoryOfferStore {
    offers: RwLock<HashMap<OfferId, Offer>>,
}

impl InMemoryOfferStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OfferStore for InMemoryOfferStore {
    fn upsert(&self, offer: Offer) -> Result<(), OffersError> {
        let mut map = self
            .offers
            .write()
            .map_err(|_| OffersError::StoreUnavailable("offer store lock poisoned".to_string()))?;
        map.insert(offer.id.clone(), offer);
        Ok(())
    }

    fn all(&self) -> Result<Vec<Offer>, OffersError> {
        let map = self
            .offers
            .read()
            .map_err(|_| OffersError::StoreUnavailable("offer store lock poisoned".to_string()))?;
        Ok(map.values().cloned().collect())
    }

    fn count(&self) -> Result<usize, OffersError> {
        let map = self
            .offers
            .read()
            .map_err(|_| OffersError::StoreUnavailable("offer store lock poisoned".to_string()))?;
        Ok(map.len())
    }
}
