//! storefront - session, CSRF and checkout core for a small web shop
//!
//! Users authenticate with a username and password and receive an encrypted
//! session cookie with a fixed lifetime. Protected pages pass through an
//! [`AuthGate`]; forms that change state carry single-use CSRF tokens; logout
//! revokes the session id before its natural expiry.

mod catalog;
mod clock;
mod coordination;
mod csrf;
mod notify;
mod session;
mod storage;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

pub use catalog::{
    CatalogError, DEFAULT_LIST_LIMIT, ListQuery, MemoryCatalog, Product, ProductCatalog,
    ProductPage, SqlCatalog,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use coordination::{CheckoutPage, CoordinationError, Storefront, StorefrontBuilder};
pub use csrf::{CHECKOUT_FORM, CsrfError, CsrfTokenManager};
pub use notify::{Address, LogNotifier, Notifier, NotifierError, Order, SpoolNotifier};
pub use session::{
    AuthGate, DEFAULT_SESSION_COOKIE_NAME, DEFAULT_SESSION_TTL, RevocationRegistry, Session,
    SessionCodec, SessionConfig, SessionError, SessionId, SessionKey, SessionStore,
    session_key_from_env,
};
pub use storage::{DataStore, DataStoreConfig, StorageError, connect_data_store};
pub use userdb::{
    CredentialVerifier, MemoryCredentialVerifier, SqlUserStore, UserError, UserRecord,
    hash_password,
};
pub use utils::{UtilError, gen_random_string};
