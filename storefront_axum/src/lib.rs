//! axum integration for the storefront core
//!
//! [`storefront_router`] serves the login, product, checkout and logout pages
//! plus the JSON API, with the auth gate in front of every protected route.

mod api;
mod config;
mod error;
mod middleware;
mod pages;
mod router;
mod session;
mod static_files;

pub use config::{STOREFRONT_HOME_URL, STOREFRONT_LOGIN_URL, STOREFRONT_THANK_YOU_URL};
pub use middleware::require_session;
pub use router::{storefront_router, storefront_router_no_trace};
pub use session::{AuthRedirect, AuthSession};
