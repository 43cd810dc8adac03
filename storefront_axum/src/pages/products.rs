use askama::Template;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::session::AuthSession;

use super::render;

#[derive(Template)]
#[template(path = "products.j2")]
struct ProductsTemplate<'a> {
    title: &'a str,
    username: &'a str,
}

pub(crate) async fn products(auth: AuthSession) -> Result<Response, (StatusCode, String)> {
    let template = ProductsTemplate {
        title: "Products",
        username: auth.username(),
    };
    Ok(render(&template)?.into_response())
}
