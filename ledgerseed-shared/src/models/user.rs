/// User accounts
///
/// Seed users arrive with a plaintext password. Passwords are hashed with
/// Argon2id on the blocking pool, all users of a run concurrently, before the
/// bulk insert.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE IF NOT EXISTS users (
///     id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
///     name VARCHAR(255) NOT NULL,
///     email TEXT NOT NULL UNIQUE,
///     password TEXT NOT NULL
/// );
/// ```
///
/// Conflict-skip is keyed on `id`. A different user reusing an existing email
/// still fails the unique constraint and aborts the run.

use crate::auth::password::hash_password;
use crate::db::bulk::rows_per_statement;
use crate::seed::{Dataset, SeedError, SeedTable};
use async_trait::async_trait;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, Postgres, QueryBuilder};
use uuid::Uuid;
use validator::Validate;

/// Table name
pub const TABLE: &str = "users";

const COLUMNS: usize = 4;

/// Stored user row
///
/// `password` holds the Argon2id PHC string, never plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User record to seed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUser {
    /// Fixed id; conflict-skip key
    pub id: Uuid,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: String,

    pub email: String,

    /// Plaintext password, hashed before insert
    #[serde(skip_serializing)]
    pub password: String,
}

async fn hash_passwords(records: &[CreateUser]) -> Result<Vec<String>, SeedError> {
    try_join_all(records.iter().map(|user| {
        let user_id = user.id;
        let password = user.password.clone();
        async move {
            tokio::task::spawn_blocking(move || hash_password(&password))
                .await?
                .map_err(|source| SeedError::PasswordHash { user_id, source })
        }
    }))
    .await
}

#[async_trait]
impl SeedTable for CreateUser {
    const DATASET: Dataset = Dataset::Users;

    async fn ensure_table(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            )
            "#,
        )
        .execute(conn)
        .await?;

        Ok(())
    }

    async fn insert_if_absent(conn: &mut PgConnection, records: &[Self]) -> Result<u64, SeedError> {
        let hashes = hash_passwords(records).await?;
        let rows: Vec<(&CreateUser, String)> = records.iter().zip(hashes).collect();

        let mut inserted = 0;
        for chunk in rows.chunks(rows_per_statement(COLUMNS)) {
            let mut builder: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO users (id, name, email, password) ");
            builder.push_values(chunk, |mut row, (user, hash)| {
                row.push_bind(user.id)
                    .push_bind(user.name.clone())
                    .push_bind(user.email.clone())
                    .push_bind(hash.clone());
            });
            builder.push(" ON CONFLICT (id) DO NOTHING");

            let result = builder
                .build()
                .execute(&mut *conn)
                .await
                .map_err(|source| SeedError::insert(Dataset::Users, source))?;
            inserted += result.rows_affected();
        }

        Ok(inserted)
    }
}
