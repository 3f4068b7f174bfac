//! Mapping from domain errors to HTTP responses.
//!
//! "Not found" is a first-class return value, converted here to a 404 with
//! the `{"error": ...}` envelope. Database failures are logged and rendered
//! as an opaque 500; their details never reach the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::dto::ErrorEnvelope;
use crate::domain::error::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper carrying a domain error across the handler boundary.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::ContactNotFound => (StatusCode::NOT_FOUND, self.0.to_string()),
            DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, self.0.to_string()),
            DomainError::Database { .. } => {
                tracing::error!(error = ?self.0, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_owned(),
                )
            }
        };

        (status, Json(ErrorEnvelope { error: message })).into_response()
    }
}
