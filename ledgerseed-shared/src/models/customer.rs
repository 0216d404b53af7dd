/// Customers
///
/// # Schema
///
/// ```sql
/// CREATE TABLE IF NOT EXISTS customers (
///     id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
///     name VARCHAR(255) NOT NULL,
///     email VARCHAR(255) NOT NULL,
///     image_url VARCHAR(255) NOT NULL
/// );
/// ```
///
/// Conflict-skip is keyed on `id`.

use crate::db::bulk::rows_per_statement;
use crate::seed::{Dataset, SeedError, SeedTable};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, Postgres, QueryBuilder};
use uuid::Uuid;
use validator::Validate;

/// Table name
pub const TABLE: &str = "customers";

const COLUMNS: usize = 4;

/// Stored customer row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Customer record to seed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCustomer {
    pub id: Uuid,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: String,

    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,

    /// Path or URL of the avatar image
    #[validate(length(max = 255, message = "Image URL must be at most 255 characters"))]
    pub image_url: String,
}

#[async_trait]
impl SeedTable for CreateCustomer {
    const DATASET: Dataset = Dataset::Customers;

    async fn ensure_table(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL,
                image_url VARCHAR(255) NOT NULL
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
                QueryBuilder::new("INSERT INTO customers (id, name, email, image_url) ");
            builder.push_values(chunk, |mut row, customer| {
                row.push_bind(customer.id)
                    .push_bind(customer.name.clone())
                    .push_bind(customer.email.clone())
                    .push_bind(customer.image_url.clone());
            });
            builder.push(" ON CONFLICT (id) DO NOTHING");

            let result = builder
                .build()
                .execute(&mut *conn)
                .await
                .map_err(|source| SeedError::insert(Dataset::Customers, source))?;
            inserted += result.rows_affected();
        }

        Ok(inserted)
    }
}
