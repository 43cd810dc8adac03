//! Error types for storefront coordination

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::csrf::CsrfError;
use crate::notify::NotifierError;
use crate::session::SessionError;
use crate::userdb::UserError;

/// Errors that can occur while handling a storefront request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinationError {
    /// Username or password did not verify
    #[error("Invalid credentials")]
    BadCredentials,

    /// The submitted anti-forgery token was missing, stale or wrong
    #[error("Bad CSRF token")]
    BadCsrf,

    /// The operation needs an authenticated session
    #[error("Unauthorized access")]
    Unauthorized,

    /// Request body could not be understood
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Session error: {0}")]
    Session(SessionError),

    #[error("CSRF error: {0}")]
    Csrf(CsrfError),

    #[error("Catalog error: {0}")]
    Catalog(CatalogError),

    #[error("User error: {0}")]
    User(UserError),

    #[error("Notifier error: {0}")]
    Notifier(NotifierError),
}

impl CoordinationError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::BadCredentials => tracing::info!("Login attempt failed"),
            Self::BadCsrf => tracing::info!("Rejected request with bad CSRF token"),
            Self::Unauthorized => tracing::debug!("Unauthorized access"),
            Self::InvalidPayload(msg) => tracing::debug!("Invalid payload: {}", msg),
            Self::Session(err) => tracing::error!("Session error: {}", err),
            Self::Csrf(err) => tracing::error!("CSRF error: {}", err),
            Self::Catalog(err) => tracing::error!("Catalog error: {}", err),
            Self::User(err) => tracing::error!("User error: {}", err),
            Self::Notifier(err) => tracing::error!("Notifier error: {}", err),
        }
        self
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        Self::Session(err).log()
    }
}

impl From<CsrfError> for CoordinationError {
    fn from(err: CsrfError) -> Self {
        match err {
            CsrfError::BadCsrf => Self::BadCsrf.log(),
            other => Self::Csrf(other).log(),
        }
    }
}

impl From<CatalogError> for CoordinationError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err).log()
    }
}

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        Self::User(err).log()
    }
}

impl From<NotifierError> for CoordinationError {
    fn from(err: NotifierError) -> Self {
        Self::Notifier(err).log()
    }
}
