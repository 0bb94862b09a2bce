//! Domain layer: core types, pure eligibility rules, and stores.
//!
//! This module contains the offer and transaction model, the lifecycle and
//! match rules, the eligibility evaluation pipeline, and the two
//! concurrent keyed stores the service layer reads from and writes to.

pub mod eligibility;
pub mod mcc;
pub mod offer;
pub mod offer_id;
pub mod offer_store;
pub mod rules;
pub mod transaction;
pub mod transaction_store;

pub use eligibility::{EligibilityResult, EligibleOffer};
pub use mcc::{Mcc, MccError};
pub use offer::{Offer, OfferInput};
pub use offer_id::OfferId;
pub use offer_store::{InMemoryOfferStore, OfferStore};
pub use transaction::Transaction;
pub use transaction_store::{InMemoryTransactionStore, TransactionStore};
