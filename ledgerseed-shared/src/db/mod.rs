/// Database layer for LedgerSeed
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool with TLS mode and health checks
/// - `schema`: Extension setup and table introspection
/// - `bulk`: Multi-row statement sizing
///
/// # Example
///
/// ```no_run
/// use ledgerseed_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

pub mod bulk;
pub mod pool;
pub mod schema;
