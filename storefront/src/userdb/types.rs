use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sqlx::FromRow;
use subtle::ConstantTimeEq;

/// A row of the users table. Only the password digest is ever stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
}

impl UserRecord {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: hash_password(password),
        }
    }

    /// Constant-time comparison of `password` against the stored digest.
    pub fn password_matches(&self, password: &str) -> bool {
        let candidate = hash_password(password);
        candidate.as_bytes().ct_eq(self.password.as_bytes()).into()
    }
}

/// Lowercase hex SHA-256 of the password, the format kept in the users table.
pub fn hash_password(password: &str) -> String {
    Sha256::digest(password.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
