use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use storefront::Storefront;

use crate::config::STOREFRONT_LOGIN_URL;
use crate::error::IntoResponseError;
use crate::session::AuthSession;

/// Revoke the current session, delete its cookie and go back to the login page.
pub(crate) async fn logout(
    State(storefront): State<Storefront>,
    AuthSession(session): AuthSession,
) -> Result<Response, (StatusCode, String)> {
    let headers = storefront
        .logout_core(&session)
        .await
        .into_response_error()?;
    Ok((headers, Redirect::to(STOREFRONT_LOGIN_URL.as_str())).into_response())
}
