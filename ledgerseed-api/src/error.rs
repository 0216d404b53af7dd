/// Error handling for the API server
///
/// Handlers return `ApiResult<T>`; `ApiError` converts into the HTTP
/// response. A failed seed run becomes a 500 carrying the error message and
/// the structured details from `SeedError::details()`:
///
/// ```json
/// {
///   "error": "Failed to seed revenue: ...",
///   "details": { "category": "constraint", "dataset": "revenue", "code": "23514", ... }
/// }
/// ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ledgerseed_shared::seed::SeedError;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Not found (404)
    NotFound(String),

    /// Seed run failed and was rolled back (500)
    SeedFailed(SeedError),
}

/// Error response format for non-seed errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "not_found")
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

/// Error response format for failed seed runs
#[derive(Debug, Serialize, Deserialize)]
pub struct SeedErrorResponse {
    /// Error message
    pub error: String,

    /// Raw error details
    pub details: JsonValue,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::SeedFailed(err) => write!(f, "Seed failed: {}", err),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::SeedFailed(err) => Some(err),
            ApiError::NotFound(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "not_found".to_string(),
                    message,
                }),
            )
                .into_response(),
            ApiError::SeedFailed(err) => {
                let details = err.details();
                tracing::error!(error = %err, %details, "Error seeding database");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(SeedErrorResponse {
                        error: err.to_string(),
                        details,
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<SeedError> for ApiError {
    fn from(err: SeedError) -> Self {
        ApiError::SeedFailed(err)
    }
}
