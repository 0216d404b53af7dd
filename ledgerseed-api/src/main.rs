//! # LedgerSeed API Server
//!
//! Serves `GET /seed`, which creates the users, customers, invoices and
//! revenue tables if needed and fills them with sample data.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgresql://... cargo run -p ledgerseed-api
//! curl http://localhost:8080/seed
//! ```

use ledgerseed_api::{
    app::{build_router, AppState},
    config::Config,
};
use ledgerseed_shared::db::pool::{close_pool, create_pool};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "ledgerseed_api=debug,ledgerseed_shared=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "LedgerSeed API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    let pool = create_pool(config.pool_config()).await?;

    let bind_address = config.bind_address();
    let app = build_router(AppState::new(pool.clone()));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    close_pool(pool).await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
