use thiserror::Error;

use crate::db::traits::StoreError;

#[derive(Debug, Clone, Error)]
pub enum MarketplaceError {
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid value for field: {0}")]
    InvalidField(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Invalid user type: {0}")]
    InvalidRole(String),
    #[error("Store failure: {0}")]
    StoreFailure(String),
}

impl From<StoreError> for MarketplaceError {
    fn from(e: StoreError) -> Self {
        Self::StoreFailure(e.to_string())
    }
}
