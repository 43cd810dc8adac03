use axum::{
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use storefront::{ListQuery, Storefront};

use crate::config::STOREFRONT_THANK_YOU_URL;
use crate::error::{api_coordination_error, api_error, api_success};
use crate::session::AuthSession;

/// Accept a checkout submission and send the browser to the confirmation page.
pub(crate) async fn order(
    State(storefront): State<Storefront>,
    AuthSession(session): AuthSession,
    body: Bytes,
) -> Response {
    match storefront.submit_order_core(session, &body).await {
        Ok(headers) => (headers, Redirect::to(STOREFRONT_THANK_YOU_URL.as_str())).into_response(),
        Err(e) => api_coordination_error(&e),
    }
}

/// One page of products, filtered by name or title prefix.
pub(crate) async fn list(
    State(storefront): State<Storefront>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(query)) = query else {
        return api_error(StatusCode::BAD_REQUEST, "Invalid query");
    };

    match storefront.list_products_core(&query).await {
        Ok(page) => api_success(page),
        Err(e) => api_coordination_error(&e),
    }
}
