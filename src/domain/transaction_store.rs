//! Concurrent, deduplicating transaction storage.
//!
//! [`InMemoryTransactionStore`] keeps transactions keyed by id together
//! with a per-user index, both behind one [`std::sync::RwLock`] so a record
//! and its index entry become visible to readers atomically.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

use super::Transaction;
use crate::error::OffersError;

/// Insert-only keyed collection of transactions.
pub trait TransactionStore: Send + Sync + Debug {
    /// Merges `batch` into the store and returns how many records were new.
    ///
    /// Any id already present, or repeated earlier in the same batch, is
    /// skipped and not counted. Existing records are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::StoreUnavailable`] if the store cannot be
    /// written.
    fn insert(&self, batch: Vec<Transaction>) -> Result<usize, OffersError>;

    /// Returns every transaction of `user_id`, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::StoreUnavailable`] if the store cannot be read.
    fn by_user(&self, user_id: &str) -> Result<Vec<Transaction>, OffersError>;

    /// Returns the number of stored transactions.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::StoreUnavailable`] if the store cannot be read.
    fn count(&self) -> Result<usize, OffersError>;
}

#[derive(Debug, Default)]
struct Inner {
    by_id: HashMap<String, Transaction>,
    by_user: HashMap<String, Vec<String>>,
}

/// In-process transaction store.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    inner: RwLock<Inner>,
}

impl InMemoryTransactionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn insert(&self, batch: Vec<Transaction>) -> Result<usize, OffersError> {
        let mut inner = self.inner.write().map_err(|_| {
            OffersError::StoreUnavailable("transaction store lock poisoned".to_string())
        })?;
        let Inner { by_id, by_user } = &mut *inner;

        let mut inserted = 0;
        for txn in batch {
            if by_id.contains_key(&txn.id) {
                continue;
            }
            by_user
                .entry(txn.user_id.clone())
                .or_default()
                .push(txn.id.clone());
            by_id.insert(txn.id.clone(), txn);
            inserted += 1;
        }
        Ok(inserted)
    }

    fn by_user(&self, user_id: &str) -> Result<Vec<Transaction>, OffersError> {
        let inner = self.inner.read().map_err(|_| {
            OffersError::StoreUnavailable("transaction store lock poisoned".to_string())
        })?;
        let Some(ids) = inner.by_user.get(user_id) else {
            return Ok(Vec::new());
        };
        Ok(ids
            .iter()
            .filter_map(|id| inner.by_id.get(id))
            .cloned()
            .collect())
    }

    fn count(&self) -> Result<usize, OffersError> {
        let inner = self.inner.read().map_err(|_| {
            OffersError::StoreUnavailable("transaction store lock poisoned".to_string())
        })?;
        Ok(inner.by_id.len())
    }
}
