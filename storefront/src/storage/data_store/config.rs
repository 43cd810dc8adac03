//! Data store connection settings

use std::{env, str::FromStr, sync::Arc};

use crate::storage::errors::StorageError;

use super::types::{DataStore, PostgresDataStore, SqliteDataStore};

/// Where the users and products tables live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStoreConfig {
    pub store_type: String,
    pub url: String,
}

impl DataStoreConfig {
    /// Read `GENERIC_DATA_STORE_TYPE` and `GENERIC_DATA_STORE_URL`.
    pub fn from_env() -> Result<Self, StorageError> {
        let store_type = env::var("GENERIC_DATA_STORE_TYPE")
            .map_err(|_| StorageError::Config("GENERIC_DATA_STORE_TYPE must be set".to_string()))?;
        let url = env::var("GENERIC_DATA_STORE_URL")
            .map_err(|_| StorageError::Config("GENERIC_DATA_STORE_URL must be set".to_string()))?;
        Ok(Self { store_type, url })
    }

    pub async fn connect(&self) -> Result<Arc<dyn DataStore>, StorageError> {
        connect_data_store(&self.store_type, &self.url).await
    }
}

/// Open a connection pool for `store_type` (`sqlite` or `postgres`).
pub async fn connect_data_store(
    store_type: &str,
    url: &str,
) -> Result<Arc<dyn DataStore>, StorageError> {
    tracing::info!(store_type, url, "Initializing data store");

    let store: Arc<dyn DataStore> = match store_type {
        "sqlite" => {
            let opts = sqlx::sqlite::SqliteConnectOptions::from_str(url)?.create_if_missing(true);
            Arc::new(SqliteDataStore {
                pool: sqlx::sqlite::SqlitePool::connect_with(opts).await?,
            })
        }
        "postgres" => Arc::new(PostgresDataStore {
            pool: sqlx::PgPool::connect(url).await?,
        }),
        t => {
            return Err(StorageError::Config(format!(
                "Unsupported store type: {t}. Supported types are 'sqlite' and 'postgres'"
            )));
        }
    };

    tracing::info!(store_type, "Connected to database");
    Ok(store)
}
