use thiserror::Error;

use crate::storage::StorageError;

#[derive(Clone, Error, Debug, PartialEq)]
pub enum UserError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<StorageError> for UserError {
    fn from(err: StorageError) -> Self {
        UserError::Storage(err.to_string())
    }
}

impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        UserError::Storage(err.to_string())
    }
}
