use thiserror::Error;

#[derive(Clone, Error, Debug, PartialEq)]
pub enum NotifierError {
    #[error("Delivery failed: {0}")]
    Delivery(String),

    #[error("Serde error: {0}")]
    Serde(String),
}

impl From<std::io::Error> for NotifierError {
    fn from(err: std::io::Error) -> Self {
        NotifierError::Delivery(err.to_string())
    }
}

impl From<serde_json::Error> for NotifierError {
    fn from(err: serde_json::Error) -> Self {
        NotifierError::Serde(err.to_string())
    }
}
