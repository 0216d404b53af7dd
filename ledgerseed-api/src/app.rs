/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use ledgerseed_api::{app::AppState, config::Config};
/// use ledgerseed_shared::db::pool::create_pool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.pool_config()).await?;
/// let state = AppState::new(pool);
/// let app = ledgerseed_api::app::build_router(state);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use axum::{routing::get, Router};
use ledgerseed_shared::seed::SeedData;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Datasets written by `GET /seed`
    pub seed_data: Arc<SeedData>,
}

impl AppState {
    /// Creates state seeding the built-in sample data
    pub fn new(db: PgPool) -> Self {
        Self::with_seed_data(db, SeedData::placeholder())
    }

    /// Creates state seeding `seed_data`
    pub fn with_seed_data(db: PgPool, seed_data: SeedData) -> Self {
        Self {
            db,
            seed_data: Arc::new(seed_data),
        }
    }
}

/// Builds the Axum router
///
/// ```text
/// /
/// ├── GET /health   # Health check
/// └── GET /seed     # Create tables and insert sample data
/// ```
///
/// Unknown paths answer 404 with a JSON body. Every request is traced by
/// tower-http's `TraceLayer`.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/seed", get(routes::seed::seed_database))
        .fallback(routes::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
