/// The contract between the orchestrator and each seed table
///
/// Each record type knows its own DDL and how to bulk-insert itself with
/// conflict-skip on its declared unique key. The orchestrator only sequences
/// the calls and owns the transaction.

use super::{Dataset, SeedError};
use async_trait::async_trait;
use sqlx::PgConnection;
use validator::Validate;

#[async_trait]
pub trait SeedTable: Validate + Send + Sync + Sized + 'static {
    /// Dataset this record type belongs to
    const DATASET: Dataset;

    /// Creates the table if absent
    ///
    /// Must be idempotent.
    async fn ensure_table(conn: &mut PgConnection) -> Result<(), sqlx::Error>;

    /// Inserts every record, skipping those whose unique key already exists
    ///
    /// Returns the number of rows actually inserted. Existing rows are never
    /// modified.
    async fn insert_if_absent(conn: &mut PgConnection, records: &[Self]) -> Result<u64, SeedError>;
}
