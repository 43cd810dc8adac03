mod checkout;
mod login;
mod logout;
mod products;

pub(crate) use checkout::{checkout, thank_you};
pub(crate) use login::{login_page, login_submit};
pub(crate) use logout::logout;
pub(crate) use products::products;

use askama::Template;
use axum::response::Html;
use http::StatusCode;

fn render<T: Template>(template: &T) -> Result<Html<String>, (StatusCode, String)> {
    template
        .render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}
