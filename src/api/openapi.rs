//! OpenAPI document assembled from the handler annotations.

use utoipa::OpenApi;

use crate::api::dto::{
    EligibleOfferDto, EligibleOffersResponse, IngestTransactionsRequest,
    IngestTransactionsResponse, OfferListResponse, OfferResponse, TransactionDto,
    UpsertOfferRequest,
};
use crate::api::handlers::system::HealthResponse;
use crate::api::handlers::{eligibility, offer, system, transaction};
use crate::error::{ErrorBody, ErrorResponse};

/// OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "eligible-offers",
        description = "Decides which merchant offers a user qualifies for from recent purchase history."
    ),
    paths(
        offer::upsert_offer,
        offer::list_offers,
        transaction::ingest_transactions,
        eligibility::eligible_offers,
        system::health_handler,
    ),
    components(schemas(
        UpsertOfferRequest,
        OfferResponse,
        OfferListResponse,
        TransactionDto,
        IngestTransactionsRequest,
        IngestTransactionsResponse,
        EligibleOfferDto,
        EligibleOffersResponse,
        HealthResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Offers", description = "Offer definitions"),
        (name = "Transactions", description = "Approved purchase ingestion"),
        (name = "Eligibility", description = "Per-user offer eligibility"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/offers",
            "/api/v1/transactions",
            "/api/v1/users/{user_id}/eligible-offers",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
