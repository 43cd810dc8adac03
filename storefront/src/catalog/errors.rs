use thiserror::Error;

use crate::storage::StorageError;

#[derive(Clone, Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl From<StorageError> for CatalogError {
    fn from(err: StorageError) -> Self {
        CatalogError::Storage(err.to_string())
    }
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        CatalogError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sqlx_error() {
        let err = CatalogError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, CatalogError::Storage(_)));
    }
}
