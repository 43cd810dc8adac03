use askama::Template;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use storefront::{CoordinationError, Storefront};

use crate::config::STOREFRONT_HOME_URL;
use crate::error::IntoResponseError;

use super::render;

#[derive(Template)]
#[template(path = "login.j2")]
struct LoginTemplate<'a> {
    title: &'a str,
    attempt_failed: bool,
}

#[derive(Deserialize)]
pub(crate) struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

pub(crate) async fn login_page() -> Result<Response, (StatusCode, String)> {
    let template = LoginTemplate {
        title: "Login",
        attempt_failed: false,
    };
    Ok(render(&template)?.into_response())
}

/// Check the submitted credentials and start a session.
///
/// A failed attempt re-renders the form with a 401 and the same message
/// whether the user is unknown or the password is wrong.
pub(crate) async fn login_submit(
    State(storefront): State<Storefront>,
    Form(form): Form<LoginForm>,
) -> Result<Response, (StatusCode, String)> {
    match storefront.login_core(&form.username, &form.password).await {
        Ok(headers) => Ok((headers, Redirect::to(STOREFRONT_HOME_URL.as_str())).into_response()),
        Err(CoordinationError::BadCredentials) => {
            let template = LoginTemplate {
                title: "Login",
                attempt_failed: true,
            };
            Ok((StatusCode::UNAUTHORIZED, render(&template)?).into_response())
        }
        Err(e) => Err(e).into_response_error(),
    }
}
