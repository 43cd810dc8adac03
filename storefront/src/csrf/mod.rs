mod errors;
mod manager;

pub use errors::CsrfError;
pub use manager::{CHECKOUT_FORM, CsrfTokenManager};
