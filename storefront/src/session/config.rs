use std::env;

use chrono::Duration;

use super::errors::SessionError;
use super::main::SessionKey;

pub const DEFAULT_SESSION_COOKIE_NAME: &str = "sessionId";
/// Seconds a session (and a revocation entry) stays valid.
pub const DEFAULT_SESSION_TTL: u64 = 300;

/// Session cookie and lifetime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub ttl: u64,
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
            ttl: DEFAULT_SESSION_TTL,
            secure_cookie: false,
        }
    }
}

impl SessionConfig {
    /// Read `SESSION_COOKIE_NAME`, `SESSION_TTL` and `SESSION_COOKIE_SECURE`,
    /// falling back to the defaults for unset or unparsable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cookie_name: env::var("SESSION_COOKIE_NAME")
                .ok()
                .filter(|name| !name.is_empty())
                .unwrap_or(defaults.cookie_name),
            ttl: env::var("SESSION_TTL")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|ttl| *ttl > 0)
                .unwrap_or(defaults.ttl),
            secure_cookie: env::var("SESSION_COOKIE_SECURE")
                .map(|val| val.to_lowercase() == "true")
                .unwrap_or(defaults.secure_cookie),
        }
    }

    pub fn ttl_duration(&self) -> Duration {
        Duration::seconds(self.ttl as i64)
    }
}

/// Load the cookie encryption key from `SESSION_SECRET`, or generate a fresh one.
///
/// A generated key lives only as long as the process: a restart logs everybody out.
pub fn session_key_from_env() -> Result<SessionKey, SessionError> {
    match env::var("SESSION_SECRET") {
        Ok(secret) if !secret.is_empty() => SessionKey::from_base64url(&secret),
        _ => {
            tracing::warn!("SESSION_SECRET not set, generating an ephemeral session key");
            SessionKey::generate()
        }
    }
}
