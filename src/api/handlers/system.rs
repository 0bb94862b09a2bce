//! System endpoints: health check.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::error::{ErrorResponse, OffersError};

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` while both stores are readable.
    pub status: String,
    /// Server time, RFC 3339.
    pub timestamp: String,
    /// Crate version.
    pub version: String,
    /// Stored offers.
    pub offers: usize,
    /// Stored transactions.
    pub transactions: usize,
}

/// `GET /health` — Service health status.
///
/// # Errors
///
/// Returns [`OffersError::StoreUnavailable`] if either store cannot be read.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, current timestamp, and store sizes.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, OffersError> {
    let offers = state.offer_service.offer_count()?;
    let transactions = state.ingestion_service.transaction_count()?;
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        offers,
        transactions,
    }))
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::api::handlers::test_support::send;
    use crate::app_state::AppState;

    #[tokio::test]
    async fn health_reports_version() {
        let (status, body) = send(&AppState::in_memory(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["offers"], 0);
        assert_eq!(body["transactions"], 0);
    }

    #[tokio::test]
    async fn health_reports_store_sizes() {
        let state = AppState::in_memory();
        let txn = |id: &str| {
            json!({
                "id": id,
                "user_id": "u1",
                "merchant_id": "m1",
                "mcc": "5812",
                "amount_cents": 100,
                "approved_at": "2025-10-20T12:00:00Z"
            })
        };
        let batch = json!({ "transactions": [txn("t1"), txn("t2"), txn("t1")] });
        send(&state, "POST", "/api/v1/transactions", Some(batch)).await;

        let (status, body) = send(&state, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["offers"], 0);
        assert_eq!(body["transactions"], 2);
    }
}
