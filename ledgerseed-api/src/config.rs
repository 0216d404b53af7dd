/// Configuration management for the API server
///
/// Loads configuration from environment variables (and a `.env` file when
/// present) into a type-safe struct.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required; `POSTGRES_URL` is accepted as a fallback)
/// - `DATABASE_SSL_MODE`: TLS mode (default: require)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `DATABASE_ACQUIRE_TIMEOUT_SECS`: Pool acquire timeout (default: 30)
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `RUST_LOG`: Log filter
///
/// # Example
///
/// ```no_run
/// use ledgerseed_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use ledgerseed_shared::db::pool::{self, parse_ssl_mode};
use sqlx::postgres::PgSslMode;
use std::env;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// TLS mode for every pooled connection
    pub ssl_mode: PgSslMode,

    /// Maximum number of connections in pool
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection
    pub acquire_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Neither `DATABASE_URL` nor `POSTGRES_URL` is set
    /// - A variable has an invalid value
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`]
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let api_port = lookup("API_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("API_PORT is invalid: {}", e))?;

        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("POSTGRES_URL"))
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let ssl_mode = match lookup("DATABASE_SSL_MODE") {
            Some(mode) => parse_ssl_mode(&mode)
                .map_err(|e| anyhow::anyhow!("DATABASE_SSL_MODE is invalid: {}", e))?,
            None => PgSslMode::Require,
        };

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u32>()
            .map_err(|e| anyhow::anyhow!("DATABASE_MAX_CONNECTIONS is invalid: {}", e))?;

        if max_connections == 0 {
            anyhow::bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        let acquire_timeout_seconds = lookup("DATABASE_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("DATABASE_ACQUIRE_TIMEOUT_SECS is invalid: {}", e))?;

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
            },
            database: DatabaseConfig {
                url: database_url,
                ssl_mode,
                max_connections,
                acquire_timeout_seconds,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    /// Pool settings for `ledgerseed_shared::db::pool::create_pool`
    pub fn pool_config(&self) -> pool::DatabaseConfig {
        pool::DatabaseConfig {
            url: self.database.url.clone(),
            ssl_mode: self.database.ssl_mode,
            max_connections: self.database.max_connections,
            acquire_timeout_seconds: self.database.acquire_timeout_seconds,
            ..Default::default()
        }
    }
}
