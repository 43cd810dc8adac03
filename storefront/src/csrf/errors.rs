use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CsrfError {
    #[error("Bad CSRF token")]
    BadCsrf,

    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
