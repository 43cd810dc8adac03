use std::sync::Arc;

use async_trait::async_trait;

use crate::storage::DataStore;
use crate::userdb::{errors::UserError, types::UserRecord, verifier::CredentialVerifier};

use super::postgres::*;
use super::sqlite::*;

/// Users table in the relational data store.
#[derive(Debug, Clone)]
pub struct SqlUserStore {
    store: Arc<dyn DataStore>,
}

impl SqlUserStore {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// Create the users table if it does not exist yet.
    pub async fn init(&self) -> Result<(), UserError> {
        match (self.store.as_sqlite(), self.store.as_postgres()) {
            (Some(pool), _) => create_tables_sqlite(pool).await,
            (_, Some(pool)) => create_tables_postgres(pool).await,
            _ => Err(UserError::Storage("Unsupported database type".to_string())),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> Result<Option<UserRecord>, UserError> {
        if let Some(pool) = self.store.as_sqlite() {
            get_user_sqlite(pool, username).await
        } else if let Some(pool) = self.store.as_postgres() {
            get_user_postgres(pool, username).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Create the user, or replace their password if they already exist.
    #[tracing::instrument(skip(self, password))]
    pub async fn add_user(&self, username: &str, password: &str) -> Result<(), UserError> {
        if username.is_empty() {
            return Err(UserError::InvalidData("Username must not be empty".to_string()));
        }
        let user = UserRecord::new(username, password);

        let result = if let Some(pool) = self.store.as_sqlite() {
            upsert_user_sqlite(pool, &user).await
        } else if let Some(pool) = self.store.as_postgres() {
            upsert_user_postgres(pool, &user).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(()) => tracing::info!("User stored"),
            Err(e) => tracing::error!(error = %e, "Storing user failed"),
        }
        result
    }
}

#[async_trait]
impl CredentialVerifier for SqlUserStore {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, UserError> {
        let user = self.get_user(username).await?;
        Ok(user.is_some_and(|user| user.password_matches(password)))
    }
}
