/// Monthly revenue
///
/// # Schema
///
/// ```sql
/// CREATE TABLE IF NOT EXISTS revenue (
///     month VARCHAR(4) NOT NULL UNIQUE,
///     revenue INT NOT NULL
/// );
/// ```
///
/// Conflict-skip is keyed on `month`.

use crate::db::bulk::rows_per_statement;
use crate::seed::{Dataset, SeedError, SeedTable};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, Postgres, QueryBuilder};
use validator::Validate;

/// Table name
pub const TABLE: &str = "revenue";

const COLUMNS: usize = 2;

/// Stored revenue row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}

/// Revenue record to seed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRevenue {
    /// Short month label, e.g. "Jan"
    #[validate(length(max = 4, message = "Month must be at most 4 characters"))]
    pub month: String,

    pub revenue: i32,
}

#[async_trait]
impl SeedTable for CreateRevenue {
    const DATASET: Dataset = Dataset::Revenue;

    async fn ensure_table(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS revenue (
                month VARCHAR(4) NOT NULL UNIQUE,
                revenue INT NOT NULL
            )
            "#,
        )
        .execute(conn)
        .await?;

        Ok(())
    }

    async fn insert_if_absent(conn: &mut PgConnection, records: &[Self]) -> Result<u64, SeedError> {
        let mut inserted = 0;

        for chunk in records.chunks(rows_per_statement(COLUMNS)) {
            let mut builder: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO revenue (month, revenue) ");
            builder.push_values(chunk, |mut row, rev| {
                row.push_bind(rev.month.clone()).push_bind(rev.revenue);
            });
            builder.push(" ON CONFLICT (month) DO NOTHING");

            let result = builder
                .build()
                .execute(&mut *conn)
                .await
                .map_err(|source| SeedError::insert(Dataset::Revenue, source))?;
            inserted += result.rows_affected();
        }

        Ok(inserted)
    }
}
