//! Transaction ingestion handler.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use super::json_body;
use crate::api::dto::{IngestTransactionsRequest, IngestTransactionsResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, OffersError};

/// `POST /transactions` — Ingest a batch of approved transactions.
///
/// # Errors
///
/// Returns [`OffersError`] if the batch is empty or malformed, or if the
/// store fails. A rejected batch stores nothing.
#[utoipa::path(
    post,
    path = "/api/v1/transactions",
    tag = "Transactions",
    summary = "Ingest transactions",
    description = "Validates the whole batch, then stores every transaction whose id is not already present. Re-submitting a batch is a no-op.",
    request_body = IngestTransactionsRequest,
    responses(
        (status = 201, description = "Batch accepted", body = IngestTransactionsResponse),
        (status = 400, description = "Empty batch, malformed body, or invalid field", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
pub async fn ingest_transactions(
    State(state): State<AppState>,
    payload: Result<Json<IngestTransactionsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, OffersError> {
    let batch = json_body(payload)?.validate()?;
    let inserted = state.ingestion_service.ingest(batch)?;
    Ok((StatusCode::CREATED, Json(IngestTransactionsResponse { inserted })))
}

/// Transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/transactions", post(ingest_transactions))
}
