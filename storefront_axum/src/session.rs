use axum::{
    extract::FromRequestParts,
    response::{IntoResponse, Redirect, Response},
};
use http::request::Parts;
use storefront::Session;

use super::config::STOREFRONT_LOGIN_URL;

/// Rejection for requests without an admitted session: a 303 to the login page.
///
/// See Other is used for every method so that a refused form or API `POST`
/// is followed up with a plain `GET /login`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        tracing::debug!("Redirecting to {}", STOREFRONT_LOGIN_URL.as_str());
        Redirect::to(STOREFRONT_LOGIN_URL.as_str()).into_response()
    }
}

/// The session admitted by the auth gate, available as an axum extractor
///
/// Only routes behind [`crate::require_session`] see one; anywhere else the
/// extractor rejects with [`AuthRedirect`].
///
/// ```no_run
/// use storefront_axum::AuthSession;
///
/// async fn whoami(AuthSession(session): AuthSession) -> String {
///     session.username.unwrap_or_default()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthSession(pub Session);

impl AuthSession {
    /// The authenticated principal. The gate never admits a session without one.
    pub fn username(&self) -> &str {
        self.0.username().unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(AuthSession)
            .ok_or(AuthRedirect)
    }
}
