//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store diagnostics are only surfaced for integrity violations; everything
//! else is logged server-side and replaced with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required field absent or empty (400)
    Validation(ValidationError),

    /// Request body missing or not parseable as JSON (400)
    MalformedBody,

    /// Credential mismatch or unknown user - indistinguishable (401)
    InvalidCredentials,

    /// Store constraint violation on write (400, diagnostic surfaced)
    Integrity { detail: String },

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "message": e.to_string()
                }),
            ),
            Self::MalformedBody => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "message": "Invalid request format"
                }),
            ),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({
                    "success": false,
                    "message": "Invalid credentials"
                }),
            ),
            Self::Integrity { detail } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "message": format!("Database integrity error: {}", detail)
                }),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "message": "An internal server error occurred"
                    }),
                )
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "message": "An internal server error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Integrity { detail } => Self::Integrity { detail },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "username" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_credentials_is_401() {
        let err = ApiError::InvalidCredentials;
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn integrity_violation_is_400() {
        let err = ApiError::Integrity {
            detail: "FOREIGN KEY constraint failed".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn integrity_db_error_maps_to_400() {
        let err: ApiError = DbError::Integrity {
            detail: "FOREIGN KEY constraint failed".into(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
