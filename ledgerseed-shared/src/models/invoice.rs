/// Invoices
///
/// Seed invoices carry no id; the database generates one. To keep re-runs
/// from duplicating them, a unique index covers the whole record and
/// conflict-skip is keyed on it. The index is added to an existing `invoices`
/// table too.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE IF NOT EXISTS invoices (
///     id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
///     customer_id UUID NOT NULL,
///     amount INT NOT NULL,
///     status VARCHAR(255) NOT NULL,
///     date DATE NOT NULL
/// );
///
/// CREATE UNIQUE INDEX IF NOT EXISTS invoices_record_key
///     ON invoices (customer_id, amount, status, date);
/// ```
///
/// Building the index fails with a unique violation when the table already
/// holds duplicate invoices; the run then rolls back.
///
/// `customer_id` refers to `customers.id` but is not a foreign key.

use crate::db::bulk::rows_per_statement;
use crate::seed::{Dataset, SeedError, SeedTable};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, Postgres, QueryBuilder};
use uuid::Uuid;
use validator::Validate;

/// Table name
pub const TABLE: &str = "invoices";

const COLUMNS: usize = 4;

/// Stored invoice row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Amount in cents
    pub amount: i32,
    pub status: String,
    pub date: NaiveDate,
}

/// Invoice record to seed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInvoice {
    pub customer_id: Uuid,

    /// Amount in cents
    pub amount: i32,

    /// "pending" or "paid" in the sample data
    #[validate(length(max = 255, message = "Status must be at most 255 characters"))]
    pub status: String,

    pub date: NaiveDate,
}

#[async_trait]
impl SeedTable for CreateInvoice {
    const DATASET: Dataset = Dataset::Invoices;

    async fn ensure_table(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS invoices (
                id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                customer_id UUID NOT NULL,
                amount INT NOT NULL,
                status VARCHAR(255) NOT NULL,
                date DATE NOT NULL
            )
            "#,
        )
        .execute(&mut *conn)
        .await?;

        sqlx::query(
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS invoices_record_key
                ON invoices (customer_id, amount, status, date)
            "#,
        )
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    async fn insert_if_absent(conn: &mut PgConnection, records: &[Self]) -> Result<u64, SeedError> {
        let mut inserted = 0;

        for chunk in records.chunks(rows_per_statement(COLUMNS)) {
            let mut builder: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO invoices (customer_id, amount, status, date) ");
            builder.push_values(chunk, |mut row, invoice| {
                row.push_bind(invoice.customer_id)
                    .push_bind(invoice.amount)
                    .push_bind(invoice.status.clone())
                    .push_bind(invoice.date);
            });
            builder.push(" ON CONFLICT (customer_id, amount, status, date) DO NOTHING");

            let result = builder
                .build()
                .execute(&mut *conn)
                .await
                .map_err(|source| SeedError::insert(Dataset::Invoices, source))?;
            inserted += result.rows_affected();
        }

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_invoice_status_validation() {
        let invoice = CreateInvoice {
            customer_id: Uuid::new_v4(),
            amount: 15795,
            status: "pending".to_string(),
            date: NaiveDate::from_ymd_opt(2022, 12, 6).unwrap(),
        };
        assert!(invoice.validate().is_ok());

        let blank = CreateInvoice {
            status: String::new(),
            ..invoice.clone()
        };
        assert!(blank.validate().is_ok());

        let long = CreateInvoice {
            status: "p".repeat(256),
            ..invoice
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_create_invoice_date_serializes_as_iso() {
        let invoice = CreateInvoice {
            customer_id: Uuid::nil(),
            amount: 666,
            status: "pending".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 6, 27).unwrap(),
        };
        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(json["date"], "2023-06-27");
    }
}
