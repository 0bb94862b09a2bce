//! Data Transfer Objects for REST request/response serialization.
//!
//! Request DTOs accept loosely typed JSON and expose a `validate` method
//! that reports every malformed field before converting to domain types.

pub mod eligibility_dto;
pub mod offer_dto;
pub mod transaction_dto;

pub use eligibility_dto::*;
pub use offer_dto::*;
pub use transaction_dto::*;
