//! Service layer: business logic orchestration.
//!
//! [`OfferService`] and [`IngestionService`] own the write paths into the
//! stores; [`EligibilityService`] is the read path that snapshots both
//! stores and runs the pure evaluation from [`crate::domain::eligibility`].

pub mod eligibility_service;
pub mod ingestion_service;
pub mod offer_service;

pub use eligibility_service::EligibilityService;
pub use ingestion_service::IngestionService;
pub use offer_service::OfferService;
