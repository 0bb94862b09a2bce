//! Ingestion service: idempotent merge of validated transaction batches.

use std::sync::Arc;

use crate::domain::{Transaction, TransactionStore};
use crate::error::OffersError;

/// Write path for transactions.
///
/// Receives batches that were fully validated at the boundary and merges
/// them into the store. Retrying a batch never double-counts.
#[derive(Debug, Clone)]
pub struct IngestionService {
    store: Arc<dyn TransactionStore>,
}

impl IngestionService {
    /// Creates a new `IngestionService`.
    #[must_use]
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    /// Inserts the batch and returns how many transactions were new.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::StoreUnavailable`] if the store rejects the
    /// write; nothing from the batch is reported as inserted in that case.
    pub fn ingest(&self, batch: Vec<Transaction>) -> Result<usize, OffersError> {
        let submitted = batch.len();
        let inserted = self.store.insert(batch)?;
        tracing::info!(
            submitted,
            inserted,
            skipped = submitted.saturating_sub(inserted),
            "transactions ingested"
        );
        Ok(inserted)
    }

    /// Number of stored transactions.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::StoreUnavailable`] if the store cannot be read.
    pub fn transaction_count(&self) -> Result<usize, OffersError> {
        self.store.count()
    }
}
