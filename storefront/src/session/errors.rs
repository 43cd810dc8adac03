use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    /// No session cookie on the request
    #[error("Session not found")]
    NotFound,

    /// Missing principal, tampered, truncated or foreign-key cookie
    #[error("Invalid session")]
    InvalidSession,

    #[error("Session expired")]
    ExpiredSession,

    #[error("Session revoked")]
    RevokedSession,

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
