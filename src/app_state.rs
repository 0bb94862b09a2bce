//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::{InMemoryOfferStore, InMemoryTransactionStore, OfferStore, TransactionStore};
use crate::service::{EligibilityService, IngestionService, OfferService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Offer upserts and listing.
    pub offer_service: Arc<OfferService>,
    /// Transaction ingestion.
    pub ingestion_service: Arc<IngestionService>,
    /// Eligibility queries.
    pub eligibility_service: Arc<EligibilityService>,
}

impl AppState {
    /// Wires all services over the given stores.
    #[must_use]
    pub fn new(offers: Arc<dyn OfferStore>, transactions: Arc<dyn TransactionStore>) -> Self {
        Self {
            offer_service: Arc::new(OfferService::new(Arc::clone(&offers))),
            ingestion_service: Arc::new(IngestionService::new(Arc::clone(&transactions))),
            eligibility_service: Arc::new(EligibilityService::new(offers, transactions)),
        }
    }

    /// Wires all services over fresh in-memory stores.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryOfferStore::new()),
            Arc::new(InMemoryTransactionStore::new()),
        )
    }
}
