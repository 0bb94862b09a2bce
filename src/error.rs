//! Service error types with HTTP status code mapping.
//!
//! [`OffersError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.
//! Business and validation failures carry enough detail for the caller to
//! fix the input; infrastructure failures are logged and surfaced opaquely.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Field name to human-readable message, ordered by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Message returned to callers in place of infrastructure detail.
const OPAQUE_MESSAGE: &str = "internal server error";

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1002,
///     "message": "validation failed",
///     "fields": { "transactions[0].mcc": "mcc must be exactly 4 characters" }
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Per-field messages for validation and business-rule failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status               |
/// |-----------|-----------------|---------------------------|
/// | 1000–1999 | Client input    | 400 Bad Request           |
/// | 3000–3999 | Infrastructure  | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum OffersError {
    /// Request could not be interpreted (malformed body or query).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// One or more fields failed structural validation.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// Input is well formed but breaks a business rule.
    #[error("{message}")]
    BusinessRule {
        /// Offending field.
        field: String,
        /// What the caller must change.
        message: String,
    },

    /// A store could not serve the operation.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl OffersError {
    /// Builds a [`OffersError::BusinessRule`] for a single field.
    #[must_use]
    pub fn business_rule(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BusinessRule {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::Validation(_) => 1002,
            Self::BusinessRule { .. } => 1003,
            Self::Internal(_) => 3000,
            Self::StoreUnavailable(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::Validation(_) | Self::BusinessRule { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::StoreUnavailable(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns `true` for failures unrelated to the caller's input.
    #[must_use]
    pub const fn is_infrastructure(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::Internal(_))
    }

    fn into_body(self) -> ErrorBody {
        let code = self.error_code();
        if self.is_infrastructure() {
            tracing::error!(code, error = %self, "request failed");
            return ErrorBody {
                code,
                message: OPAQUE_MESSAGE.to_string(),
                fields: None,
            };
        }
        let message = self.to_string();
        let fields = match self {
            Self::Validation(fields) => Some(fields),
            Self::BusinessRule { field, message } => Some(FieldErrors::from([(field, message)])),
            _ => None,
        };
        ErrorBody {
            code,
            message,
            fields,
        }
    }
}

impl IntoResponse for OffersError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.into_body(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_bad_request() {
        assert_eq!(
            OffersError::InvalidRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            OffersError::Validation(FieldErrors::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            OffersError::business_rule("starts_at", "nope").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn infrastructure_errors_hide_detail() {
        let body = OffersError::StoreUnavailable("offer store lock poisoned".into()).into_body();
        assert_eq!(body.code, 3001);
        assert_eq!(body.message, "internal server error");
        assert!(body.fields.is_none());
    }

    #[test]
    fn business_rule_reports_field() {
        let body =
            OffersError::business_rule("starts_at", "starts_at must be before ends_at").into_body();
        assert_eq!(body.code, 1003);
        assert_eq!(body.message, "starts_at must be before ends_at");
        let fields = body.fields.unwrap_or_default();
        assert_eq!(
            fields.get("starts_at").map(String::as_str),
            Some("starts_at must be before ends_at")
        );
    }

    #[test]
    fn validation_serializes_fields() {
        let mut fields = FieldErrors::new();
        fields.insert("mcc".into(), "mcc is required".into());
        let response = ErrorResponse {
            error: OffersError::Validation(fields).into_body(),
        };
        let json = serde_json::to_string(&response).unwrap_or_default();
        assert!(json.contains("\"code\":1002"));
        assert!(json.contains("mcc is required"));
    }
}
