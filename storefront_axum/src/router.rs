//! Router for the storefront pages and API

use axum::{
    Router, middleware,
    routing::{get, post},
};
use storefront::Storefront;
use tower_http::LatencyUnit;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::{api, middleware::require_session, pages, static_files};

/// Create the storefront router with HTTP tracing and CORS headers
///
/// Public routes:
/// - `GET /login`, `POST /login`
/// - `GET /app.js`, `GET /style.css`
///
/// Everything else sits behind the auth gate and redirects to `/login` when
/// the session is missing, revoked or expired.
pub fn storefront_router(storefront: Storefront) -> Router {
    storefront_router_no_trace(storefront)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}

/// Same routes as [`storefront_router`] without the tracing and CORS layers.
pub fn storefront_router_no_trace(storefront: Storefront) -> Router {
    let protected = Router::new()
        .route("/", get(pages::products))
        .route("/products", get(pages::products))
        .route("/checkout", get(pages::checkout))
        .route("/thank-you", get(pages::thank_you))
        .route("/logout", get(pages::logout))
        .route("/api/order", post(api::order))
        .route("/api/list", get(api::list))
        .route_layer(middleware::from_fn_with_state(
            storefront.clone(),
            require_session,
        ));

    Router::new()
        .route("/login", get(pages::login_page).post(pages::login_submit))
        .route("/app.js", get(static_files::serve_app_js))
        .route("/style.css", get(static_files::serve_style_css))
        .merge(protected)
        .with_state(storefront)
}
