//! Redirect targets used by the storefront pages

use std::sync::LazyLock;

/// Where anonymous or rejected requests are sent
/// Default: "/login"
pub static STOREFRONT_LOGIN_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("STOREFRONT_LOGIN_URL").unwrap_or_else(|_| "/login".to_string())
});

/// Landing page after a successful login
/// Default: "/products"
pub static STOREFRONT_HOME_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("STOREFRONT_HOME_URL").unwrap_or_else(|_| "/products".to_string())
});

/// Confirmation page after an accepted order
/// Default: "/thank-you"
pub static STOREFRONT_THANK_YOU_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("STOREFRONT_THANK_YOU_URL").unwrap_or_else(|_| "/thank-you".to_string())
});
