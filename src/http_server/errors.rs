//! # REST API Errors
//!
//! Maps store and validation failures to HTTP responses. Validation
//! messages pass through verbatim; unexpected failures stay generic on
//! the wire and are logged server-side where they occur.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::registry::RegistryError;
use crate::validate::ValidationError;

/// Result type for REST handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body failed a content rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request body was not parseable JSON
    #[error("{0}")]
    MalformedBody(String),

    /// Path identifier resolved to nothing
    #[error(transparent)]
    NotFound(#[from] RegistryError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Anything unexpected
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(RegistryError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::EntityKind;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(ValidationError::MissingName(EntityKind::Student)).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MalformedBody("oops".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound(RegistryError::NotFound(EntityKind::Class)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_pass_through_verbatim() {
        let err = ApiError::from(ValidationError::MissingTerm);
        assert_eq!(err.to_string(), "Class term is required");

        let err = ApiError::from(RegistryError::NotFound(EntityKind::Professor));
        assert_eq!(err.to_string(), "Professor not found");
    }

    #[test]
    fn test_internal_error_stays_generic() {
        assert_eq!(ApiError::Internal.to_string(), "Internal server error");
    }
}
