mod config;
mod errors;
mod main;
mod types;

pub use config::{
    DEFAULT_SESSION_COOKIE_NAME, DEFAULT_SESSION_TTL, SessionConfig, session_key_from_env,
};
pub use errors::SessionError;
pub use main::{AuthGate, RevocationRegistry, SessionCodec, SessionKey, SessionStore};
pub use types::{Session, SessionId};
