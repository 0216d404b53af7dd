/// Schema helpers shared by the seed tables
///
/// Table DDL lives with each record type in `models`; this module holds the
/// pieces every table depends on, plus introspection used to check the result
/// of a seed run.

use sqlx::{PgConnection, PgExecutor};
use tracing::debug;

/// Extension providing `uuid_generate_v4()` for server-side id defaults
pub const UUID_EXTENSION: &str = "uuid-ossp";

/// Creates the `uuid-ossp` extension if it is not installed yet
///
/// Idempotent. Runs on the caller's connection so it joins any open
/// transaction.
///
/// # Errors
///
/// Returns an error if the role may not create extensions or the connection fails
pub async fn ensure_uuid_extension(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    debug!(extension = UUID_EXTENSION, "Ensuring extension exists");

    sqlx::query(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
        .execute(conn)
        .await?;

    Ok(())
}

/// Checks whether a table exists in the `public` schema
///
/// # Errors
///
/// Returns an error if the catalog query fails
pub async fn table_exists<'e, E>(executor: E, table_name: &str) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = $1
        )",
    )
    .bind(table_name)
    .fetch_one(executor)
    .await
}

/// Counts the rows of a seed table
///
/// `table_name` is interpolated into the statement, so callers pass one of
/// the `TABLE` constants from `models`, never user input.
///
/// # Errors
///
/// Returns an error if the table does not exist or the query fails
pub async fn count_rows<'e, E>(executor: E, table_name: &'static str) -> Result<i64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let query = format!("SELECT COUNT(*) FROM {}", table_name);
    sqlx::query_scalar(&query).fetch_one(executor).await
}
