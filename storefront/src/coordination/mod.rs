//! Storefront coordination
//!
//! Framework-agnostic request handling: each `*_core` method on [`Storefront`]
//! takes what the HTTP layer extracted and returns headers or data for it to
//! render. The axum integration crate is a thin shell around these.

mod checkout;
mod errors;
mod login;
mod logout;
mod products;
mod state;

pub use checkout::CheckoutPage;
pub use errors::CoordinationError;
pub use state::{Storefront, StorefrontBuilder};
