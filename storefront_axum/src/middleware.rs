use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use storefront::Storefront;

use super::session::AuthRedirect;

/// Auth gate for protected routes.
///
/// Admitted requests continue with their [`storefront::Session`] in the request
/// extensions; anything else is redirected to the login page.
pub async fn require_session(
    State(storefront): State<Storefront>,
    mut req: Request,
    next: Next,
) -> Response {
    match storefront.gate().authorize(req.headers()).await {
        Ok(session) => {
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        Err(reason) => {
            tracing::debug!(%reason, path = %req.uri().path(), "Auth gate refused request");
            AuthRedirect.into_response()
        }
    }
}
