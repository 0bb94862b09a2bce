//! # eligible-offers
//!
//! REST service that decides which merchant offers a user currently
//! qualifies for, based on their recent approved purchases.
//!
//! Operators upsert offers (merchant, category whitelist, threshold,
//! lookback window, validity period). Card transactions are ingested in
//! idempotent batches. A query evaluates every active offer against the
//! user's transactions inside each offer's trailing window.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers + DTO validation (api/)
//!     │
//!     ├── OfferService / IngestionService / EligibilityService (service/)
//!     │
//!     ├── Rules + evaluator (domain/)
//!     │
//!     └── OfferStore / TransactionStore (in-memory)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
