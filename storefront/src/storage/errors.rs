use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        // Given a StorageError with a Storage variant
        let error = StorageError::Storage("Connection failed".to_string());

        // Then it should format correctly
        assert_eq!(error.to_string(), "Storage error: Connection failed");
    }

    #[test]
    fn test_from_sqlx_error() {
        let storage_error = StorageError::from(sqlx::Error::RowNotFound);
        assert!(matches!(storage_error, StorageError::Storage(_)));
    }

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<StorageError>();
    }
}
