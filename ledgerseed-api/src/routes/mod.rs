/// API route handlers
///
/// - `health`: Health check endpoint
/// - `seed`: Database seeding endpoint

pub mod health;
pub mod seed;

use crate::error::ApiError;
use axum::http::Uri;

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
