/// Database seeding endpoint
///
/// # Endpoint
///
/// ```text
/// GET /seed
/// ```
///
/// Creates the seed tables if absent and inserts the sample datasets in one
/// transaction. Safe to call repeatedly: rows whose key already exists are
/// skipped.
///
/// # Response
///
/// ```json
/// {
///   "message": "Database seeded successfully",
///   "summary": { "users": 1, "customers": 6, "invoices": 13, "revenue": 12 }
/// }
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: the run failed and was rolled back; body is
///   `{"error": "...", "details": {...}}`

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use ledgerseed_shared::seed::{self, SeedSummary};
use serde::{Deserialize, Serialize};

/// Seed response
#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    /// Outcome message
    pub message: String,

    /// Records processed per dataset
    pub summary: SeedSummary,
}

/// Seed handler
pub async fn seed_database(State(state): State<AppState>) -> ApiResult<Json<SeedResponse>> {
    tracing::info!("Seed requested");

    let summary = seed::seed(&state.db, &state.seed_data).await?;

    Ok(Json(SeedResponse {
        message: "Database seeded successfully".to_string(),
        summary,
    }))
}
