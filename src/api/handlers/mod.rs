//! REST endpoint handlers organized by resource.

pub mod eligibility;
pub mod offer;
pub mod system;
pub mod transaction;

use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::error::OffersError;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(offer::routes())
        .merge(transaction::routes())
        .merge(eligibility::routes())
}

/// Unwraps a JSON body, mapping decode failures to
/// [`OffersError::InvalidRequest`] so they share the typed error body.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, OffersError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "rejected request body");
            Err(OffersError::InvalidRequest(rejection.body_text()))
        }
    }
}

/// Unwraps query parameters, mapping decode failures to
/// [`OffersError::InvalidRequest`].
fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, OffersError> {
    match query {
        Ok(Query(params)) => Ok(params),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "rejected query string");
            Err(OffersError::InvalidRequest(rejection.body_text()))
        }
    }
}
