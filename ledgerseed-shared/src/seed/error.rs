/// Seed error types
///
/// Every failure of a seed run is one `SeedError`. The orchestrator never
/// retries: the first error rolls the transaction back and is handed to the
/// caller, which renders `details()` into its response.

use super::Dataset;
use crate::auth::password::PasswordError;
use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use uuid::Uuid;

/// Error type for seed runs
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Could not acquire a connection or open the transaction
    #[error("Failed to open seed transaction: {0}")]
    Connection(#[source] sqlx::Error),

    /// `CREATE EXTENSION "uuid-ossp"` failed
    #[error("Failed to create uuid-ossp extension: {0}")]
    Extension(#[source] sqlx::Error),

    /// Table DDL failed
    #[error("Failed to create {dataset} table: {source}")]
    Table {
        dataset: Dataset,
        #[source]
        source: sqlx::Error,
    },

    /// A record was rejected before reaching the database
    #[error("Invalid {dataset} record at index {index}: {source}")]
    InvalidRecord {
        dataset: Dataset,
        index: usize,
        #[source]
        source: validator::ValidationErrors,
    },

    /// A bulk insert statement failed
    #[error("Failed to seed {dataset}: {source}")]
    Insert {
        dataset: Dataset,
        #[source]
        source: sqlx::Error,
    },

    /// Hashing a seed user's password failed
    #[error("Failed to hash password for user {user_id}: {source}")]
    PasswordHash {
        user_id: Uuid,
        #[source]
        source: PasswordError,
    },

    /// A blocking hashing task panicked or was cancelled
    #[error("Password hashing task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    /// The final commit failed; nothing was persisted
    #[error("Failed to commit seed transaction: {0}")]
    Commit(#[source] sqlx::Error),
}

/// Coarse classification of a seed failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Connection, transaction, extension or table creation failed
    Setup,

    /// A record was rejected by validation or by the schema
    Constraint,

    /// Anything else
    Unexpected,
}

impl SeedError {
    /// Builds an insert error for `dataset`
    pub fn insert(dataset: Dataset, source: sqlx::Error) -> Self {
        SeedError::Insert { dataset, source }
    }

    /// Dataset being processed when the error occurred, if any
    pub fn dataset(&self) -> Option<Dataset> {
        match self {
            SeedError::Table { dataset, .. }
            | SeedError::InvalidRecord { dataset, .. }
            | SeedError::Insert { dataset, .. } => Some(*dataset),
            SeedError::PasswordHash { .. } | SeedError::Worker(_) => Some(Dataset::Users),
            SeedError::Connection(_) | SeedError::Extension(_) | SeedError::Commit(_) => None,
        }
    }

    /// Underlying driver error, if any
    pub fn sqlx_error(&self) -> Option<&sqlx::Error> {
        match self {
            SeedError::Connection(source)
            | SeedError::Extension(source)
            | SeedError::Commit(source)
            | SeedError::Table { source, .. }
            | SeedError::Insert { source, .. } => Some(source),
            SeedError::InvalidRecord { .. }
            | SeedError::PasswordHash { .. }
            | SeedError::Worker(_) => None,
        }
    }

    /// Classifies the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            SeedError::Connection(_)
            | SeedError::Extension(_)
            | SeedError::Table { .. }
            | SeedError::Commit(_) => ErrorCategory::Setup,
            SeedError::InvalidRecord { .. } => ErrorCategory::Constraint,
            SeedError::Insert { source, .. } => classify_insert_error(source),
            SeedError::PasswordHash { .. } | SeedError::Worker(_) => ErrorCategory::Unexpected,
        }
    }

    /// Structured description of the error for API responses and logs
    ///
    /// Always carries `category`; adds `dataset`, the driver's SQLSTATE
    /// `code`, `constraint` and `message` when available, and the per-field
    /// validation errors for rejected records.
    pub fn details(&self) -> JsonValue {
        let mut details = json!({ "category": self.category() });

        if let Some(dataset) = self.dataset() {
            details["dataset"] = json!(dataset);
        }

        match self {
            SeedError::InvalidRecord { index, source, .. } => {
                details["index"] = json!(index);
                details["fields"] = serde_json::to_value(source).unwrap_or(JsonValue::Null);
            }
            SeedError::PasswordHash { user_id, source } => {
                details["user_id"] = json!(user_id);
                details["cause"] = json!(source.to_string());
            }
            SeedError::Worker(source) => {
                details["cause"] = json!(source.to_string());
            }
            _ => {}
        }

        if let Some(err) = self.sqlx_error() {
            match err {
                sqlx::Error::Database(db_err) => {
                    details["code"] = json!(db_err.code());
                    details["constraint"] = json!(db_err.constraint());
                    details["message"] = json!(db_err.message());
                }
                other => {
                    details["cause"] = json!(other.to_string());
                }
            }
        }

        details
    }
}

fn classify_insert_error(err: &sqlx::Error) -> ErrorCategory {
    match err {
        sqlx::Error::Database(db_err) => {
            // SQLSTATE class 22 (data exception) and 23 (integrity constraint violation)
            let sqlstate_class = db_err.code().map(|code| code.chars().take(2).collect::<String>());
            match sqlstate_class.as_deref() {
                Some("22") | Some("23") => ErrorCategory::Constraint,
                _ => ErrorCategory::Unexpected,
            }
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => ErrorCategory::Setup,
        _ => ErrorCategory::Unexpected,
    }
}
