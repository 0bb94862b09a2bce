//! Eligibility query handler.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use super::query_params;
use crate::api::dto::{EligibleOffersQuery, EligibleOffersResponse};
use crate::api::validation::parse_timestamp;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, FieldErrors, OffersError};

/// `GET /users/{user_id}/eligible-offers` — Offers the user qualifies for.
///
/// # Errors
///
/// Returns [`OffersError::InvalidRequest`] if the query string cannot be
/// decoded, [`OffersError::Validation`] if `now` is not an RFC 3339
/// timestamp, or [`OffersError::StoreUnavailable`] if a store cannot be
/// read.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/eligible-offers",
    tag = "Eligibility",
    summary = "List eligible offers",
    description = "Evaluates every active offer against the user's transactions inside each offer's lookback window ending at `now`.",
    params(
        ("user_id" = String, Path, description = "User to evaluate"),
        EligibleOffersQuery,
    ),
    responses(
        (status = 200, description = "Eligible offers, possibly empty", body = EligibleOffersResponse),
        (status = 400, description = "Malformed query or unparseable now", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
pub async fn eligible_offers(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    query: Result<Query<EligibleOffersQuery>, QueryRejection>,
) -> Result<impl IntoResponse, OffersError> {
    let query = query_params(query)?;
    let now = match query.now.as_deref() {
        None | Some("") => Utc::now(),
        Some(raw) => parse_timestamp(raw).ok_or_else(|| {
            OffersError::Validation(FieldErrors::from([(
                "now".to_string(),
                "now must be an RFC 3339 timestamp".to_string(),
            )]))
        })?,
    };

    let result = state.eligibility_service.eligible_offers(&user_id, now)?;
    Ok(Json(EligibleOffersResponse::from(result)))
}

/// Eligibility routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users/{user_id}/eligible-offers", get(eligible_offers))
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::api::handlers::test_support::send;
    use crate::app_state::AppState;

    const NOW: &str = "2025-10-21T10:00:00Z";

    async fn seed(state: &AppState, min_txn_count: u32, txn_days_ago: &[u32]) {
        let offer = json!({
            "id": "offer-a",
            "merchant_id": "m1",
            "mcc_whitelist": ["5812"],
            "active": true,
            "min_txn_count": min_txn_count,
            "lookback_days": 30,
            "starts_at": "2025-10-01T00:00:00Z",
            "ends_at": "2025-11-01T00:00:00Z"
        });
        send(state, "POST", "/api/v1/offers", Some(offer)).await;

        let transactions: Vec<Value> = txn_days_ago
            .iter()
            .enumerate()
            .map(|(i, days)| {
                json!({
                    "id": format!("t{i}"),
                    "user_id": "u1",
                    "merchant_id": "m1",
                    "mcc": "5999",
                    "amount_cents": 100,
                    "approved_at": format!("2025-10-{:02}T10:00:00Z", 21 - days)
                })
            })
            .collect();
        let body = json!({ "transactions": transactions });
        send(state, "POST", "/api/v1/transactions", Some(body)).await;
    }

    #[tokio::test]
    async fn qualifying_user_gets_offer_with_reason() {
        let state = AppState::in_memory();
        seed(&state, 3, &[1, 2, 3]).await;
        let uri = format!("/api/v1/users/u1/eligible-offers?now={NOW}");
        let (status, body) = send(&state, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_id"], "u1");
        assert_eq!(
            body["eligible_offers"],
            json!([{ "offer_id": "offer-a", "reason": ">= 3 transactions in last 30 days" }])
        );
    }

    #[tokio::test]
    async fn below_threshold_yields_empty_list() {
        let state = AppState::in_memory();
        seed(&state, 3, &[1, 2]).await;
        let uri = format!("/api/v1/users/u1/eligible-offers?now={NOW}");
        let (status, body) = send(&state, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["eligible_offers"], json!([]));
    }

    #[tokio::test]
    async fn unknown_user_is_not_an_error() {
        let state = AppState::in_memory();
        seed(&state, 1, &[1]).await;
        let uri = format!("/api/v1/users/nobody/eligible-offers?now={NOW}");
        let (status, body) = send(&state, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_id"], "nobody");
        assert_eq!(body["eligible_offers"], json!([]));
    }

    #[tokio::test]
    async fn bad_now_is_rejected() {
        let state = AppState::in_memory();
        let (status, body) =
            send(&state, "GET", "/api/v1/users/u1/eligible-offers?now=tomorrow", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 1002);
        assert_eq!(body["error"]["fields"]["now"], "now must be an RFC 3339 timestamp");
    }

    #[tokio::test]
    async fn repeated_now_is_invalid_request() {
        let state = AppState::in_memory();
        let uri = format!("/api/v1/users/u1/eligible-offers?now={NOW}&now=2025-10-22T10:00:00Z");
        let (status, body) = send(&state, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 1001);
        assert!(body["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn missing_now_uses_current_time() {
        let state = AppState::in_memory();
        let (status, body) = send(&state, "GET", "/api/v1/users/u1/eligible-offers", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["eligible_offers"], json!([]));
    }
}
