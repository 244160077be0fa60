use thiserror::Error;

use crate::db::traits::StoreError;

#[derive(Debug, Error)]
pub enum SqliteDatabaseError {
    #[error("Database connection error: {0}")]
    DriverError(#[from] sqlx::Error),
    #[error("Database migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
    #[error("Could not prepare the database location: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Database query error: {0}")]
    QueryError(String),
}

impl From<SqliteDatabaseError> for StoreError {
    fn from(e: SqliteDatabaseError) -> Self {
        match e {
            SqliteDatabaseError::QueryError(s) => StoreError::QueryError(s),
            e => StoreError::DatabaseError(e.to_string()),
        }
    }
}
