//! Offer handlers: upsert and list.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use super::json_body;
use crate::api::dto::{OfferListResponse, OfferResponse, UpsertOfferRequest};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, OffersError};

/// `POST /offers` — Create or replace an offer.
///
/// # Errors
///
/// Returns [`OffersError`] on malformed input, an inverted validity window,
/// or a store failure.
#[utoipa::path(
    post,
    path = "/api/v1/offers",
    tag = "Offers",
    summary = "Upsert an offer",
    description = "Stores an offer, replacing any existing offer with the same id. An id is generated when none is supplied.",
    request_body = UpsertOfferRequest,
    responses(
        (status = 201, description = "Offer stored", body = OfferResponse),
        (status = 400, description = "Malformed body, invalid field, or starts_at not before ends_at", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
pub async fn upsert_offer(
    State(state): State<AppState>,
    payload: Result<Json<UpsertOfferRequest>, JsonRejection>,
) -> Result<impl IntoResponse, OffersError> {
    let input = json_body(payload)?.validate()?;
    let offer = state.offer_service.upsert_offer(input)?;
    Ok((StatusCode::CREATED, Json(OfferResponse::from(offer))))
}

/// `GET /offers` — List stored offers.
///
/// # Errors
///
/// Returns [`OffersError::StoreUnavailable`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/offers",
    tag = "Offers",
    summary = "List offers",
    description = "Returns every stored offer, active or not, ordered by id.",
    responses(
        (status = 200, description = "Offer list", body = OfferListResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
pub async fn list_offers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, OffersError> {
    let data = state
        .offer_service
        .list_offers()?
        .into_iter()
        .map(OfferResponse::from)
        .collect();
    Ok(Json(OfferListResponse { data }))
}

/// Offer routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/offers", post(upsert_offer).get(list_offers))
}
