use axum::{
    http::{StatusCode, header::CONTENT_TYPE},
    response::Response,
};

use crate::error::IntoResponseError;

pub(crate) async fn serve_app_js() -> Result<Response, (StatusCode, String)> {
    let js_content = include_str!("../static/app.js");
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/javascript")
        .body(js_content.into())
        .into_response_error()
}

pub(crate) async fn serve_style_css() -> Result<Response, (StatusCode, String)> {
    let css_content = include_str!("../static/style.css");
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/css")
        .body(css_content.into())
        .into_response_error()
}
