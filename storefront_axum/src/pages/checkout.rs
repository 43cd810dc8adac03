use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storefront::Storefront;

use crate::error::IntoResponseError;
use crate::session::AuthSession;

use super::render;

#[derive(Template)]
#[template(path = "checkout.j2")]
struct CheckoutTemplate<'a> {
    title: &'a str,
    username: &'a str,
    csrf_token: &'a str,
}

#[derive(Template)]
#[template(path = "thank_you.j2")]
struct ThankYouTemplate<'a> {
    title: &'a str,
    username: &'a str,
}

/// Checkout form with a freshly minted CSRF token.
pub(crate) async fn checkout(
    State(storefront): State<Storefront>,
    AuthSession(session): AuthSession,
) -> Result<Response, (StatusCode, String)> {
    let page = storefront
        .checkout_core(session)
        .await
        .into_response_error()?;

    let template = CheckoutTemplate {
        title: "Checkout",
        username: &page.username,
        csrf_token: &page.csrf_token,
    };
    let html = render(&template)?;
    Ok((page.headers, html).into_response())
}

pub(crate) async fn thank_you(auth: AuthSession) -> Result<Response, (StatusCode, String)> {
    let template = ThankYouTemplate {
        title: "Thank you",
        username: auth.username(),
    };
    Ok(render(&template)?.into_response())
}
