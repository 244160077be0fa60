use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Could not build query: {0}")]
    QueryError(String),
}
