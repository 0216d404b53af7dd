/// Seed orchestrator
///
/// Populates an empty (or partially seeded) database with the fixed sample
/// datasets. One run:
///
/// 1. checks every record against the column length limits,
/// 2. opens one transaction on one pooled connection,
/// 3. creates the `uuid-ossp` extension,
/// 4. for users, customers, invoices and revenue in that order: creates the
///    table if absent, then inserts all records with conflict-skip,
/// 5. commits and returns the per-dataset record counts.
///
/// Any failure rolls back everything the run did. Re-running against a seeded
/// database inserts nothing and still succeeds.
///
/// # Example
///
/// ```no_run
/// use ledgerseed_shared::db::pool::{create_pool, DatabaseConfig};
/// use ledgerseed_shared::seed::{seed, SeedData};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig {
///     url: std::env::var("DATABASE_URL")?,
///     ..Default::default()
/// })
/// .await?;
///
/// let summary = seed(&pool, &SeedData::placeholder()).await?;
/// println!("Seeded {} customers", summary.customers);
/// # Ok(())
/// # }
/// ```

pub mod error;
pub mod placeholder;
pub mod table;

pub use error::{ErrorCategory, SeedError};
pub use table::SeedTable;

use crate::db::schema;
use crate::models::{
    customer::CreateCustomer, invoice::CreateInvoice, revenue::CreateRevenue, user::CreateUser,
};
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use std::fmt;
use tracing::{debug, info, warn};

/// The four seed datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Users,
    Customers,
    Invoices,
    Revenue,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Users => "users",
            Dataset::Customers => "customers",
            Dataset::Invoices => "invoices",
            Dataset::Revenue => "revenue",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records to seed, one vector per dataset
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<CreateUser>,
    pub customers: Vec<CreateCustomer>,
    pub invoices: Vec<CreateInvoice>,
    pub revenue: Vec<CreateRevenue>,
}

/// Number of records processed per dataset
///
/// Counts are the input lengths, not the number of rows newly inserted: a
/// re-run that skips every row reports the same summary as the first run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    pub users: usize,
    pub customers: usize,
    pub invoices: usize,
    pub revenue: usize,
}

impl SeedData {
    /// Summary this data produces on a successful run
    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            users: self.users.len(),
            customers: self.customers.len(),
            invoices: self.invoices.len(),
            revenue: self.revenue.len(),
        }
    }

    /// Checks every record of every dataset against its column limits
    ///
    /// Only values the schema would reject fail here; anything else is left
    /// to the database and to conflict-skip.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::InvalidRecord` for the first rejected record
    pub fn validate(&self) -> Result<(), SeedError> {
        validate_records(&self.users)?;
        validate_records(&self.customers)?;
        validate_records(&self.invoices)?;
        validate_records(&self.revenue)?;
        Ok(())
    }
}

fn validate_records<T: SeedTable>(records: &[T]) -> Result<(), SeedError> {
    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|source| SeedError::InvalidRecord {
                dataset: T::DATASET,
                index,
                source,
            })?;
    }
    Ok(())
}

/// Runs one seed pass inside a single transaction
///
/// The transaction's connection is returned to the pool exactly once, on
/// commit, on rollback, or when the transaction is dropped.
///
/// # Errors
///
/// Returns the first `SeedError` encountered; nothing from the run is
/// committed in that case.
pub async fn seed(pool: &PgPool, data: &SeedData) -> Result<SeedSummary, SeedError> {
    info!("Starting database seeding");

    data.validate()?;

    let mut tx = pool.begin().await.map_err(SeedError::Connection)?;
    debug!("Seed transaction opened");

    if let Err(err) = seed_in_transaction(&mut *tx, data).await {
        match tx.rollback().await {
            Ok(()) => debug!("Seed transaction rolled back"),
            // The connection is closed instead of returned; the server discards
            // the uncommitted work either way.
            Err(rollback_err) => warn!(error = %rollback_err, "Failed to roll back seed transaction"),
        }
        return Err(err);
    }

    tx.commit().await.map_err(SeedError::Commit)?;
    debug!("Seed transaction committed");

    let summary = data.summary();
    info!(
        users = summary.users,
        customers = summary.customers,
        invoices = summary.invoices,
        revenue = summary.revenue,
        "Database seeded successfully"
    );

    Ok(summary)
}

async fn seed_in_transaction(conn: &mut PgConnection, data: &SeedData) -> Result<(), SeedError> {
    schema::ensure_uuid_extension(conn)
        .await
        .map_err(SeedError::Extension)?;

    seed_table(conn, &data.users).await?;
    seed_table(conn, &data.customers).await?;
    seed_table(conn, &data.invoices).await?;
    seed_table(conn, &data.revenue).await?;

    Ok(())
}

async fn seed_table<T: SeedTable>(conn: &mut PgConnection, records: &[T]) -> Result<u64, SeedError> {
    let dataset = T::DATASET;
    info!(%dataset, "Seeding {}...", dataset);

    T::ensure_table(conn)
        .await
        .map_err(|source| SeedError::Table { dataset, source })?;

    let inserted = T::insert_if_absent(conn, records).await?;

    info!(
        %dataset,
        processed = records.len(),
        inserted,
        skipped = (records.len() as u64).saturating_sub(inserted),
        "{} seeded: {} records processed",
        dataset,
        records.len()
    );

    Ok(inserted)
}
