use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::{Result as HttpResponse, StatusCode};
use serde::Serialize;
use storefront::CoordinationError;

/// Helper trait for converting errors to a standard response error format
pub(crate) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Status code and client-facing message for a coordination failure.
///
/// Messages stay generic: nothing about sessions, users or storage leaks out.
pub(crate) fn status_and_message(err: &CoordinationError) -> (StatusCode, &'static str) {
    match err {
        CoordinationError::BadCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
        CoordinationError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
        CoordinationError::BadCsrf => (StatusCode::BAD_REQUEST, "Bad CSRF token"),
        CoordinationError::InvalidPayload(_) => (StatusCode::BAD_REQUEST, "Invalid request body"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Server error"),
    }
}

impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let (status, message) = status_and_message(&e);
            (status, message.to_string())
        })
    }
}

/// Implementation for http::Error (used by Response::builder())
impl<T> IntoResponseError<T> for HttpResponse<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
    }
}

/// JSON envelope of every `/api` response.
#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "UPPERCASE")]
pub(crate) enum ApiEnvelope<T: Serialize> {
    Success { body: T },
    Error { message: String },
}

pub(crate) fn api_success<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(ApiEnvelope::Success { body })).into_response()
}

pub(crate) fn api_error(status: StatusCode, message: &str) -> Response {
    let envelope: ApiEnvelope<()> = ApiEnvelope::Error {
        message: message.to_string(),
    };
    (status, Json(envelope)).into_response()
}

pub(crate) fn api_coordination_error(err: &CoordinationError) -> Response {
    let (status, message) = status_and_message(err);
    api_error(status, message)
}
