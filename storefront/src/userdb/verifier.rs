use std::collections::HashMap;

use async_trait::async_trait;

use super::errors::UserError;
use super::types::UserRecord;

/// Answers whether a username and password pair is valid.
///
/// Implementations must not reveal whether the username exists.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, UserError>;
}

/// Fixed set of users held in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryCredentialVerifier {
    users: HashMap<String, UserRecord>,
}

impl MemoryCredentialVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, username: &str, password: &str) -> Self {
        self.users
            .insert(username.to_string(), UserRecord::new(username, password));
        self
    }
}

#[async_trait]
impl CredentialVerifier for MemoryCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, UserError> {
        Ok(self
            .users
            .get(username)
            .is_some_and(|user| user.password_matches(password)))
    }
}
