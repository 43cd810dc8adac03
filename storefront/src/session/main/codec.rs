//! Session cookie codec
//!
//! A session is serialized to JSON and sealed with AES-256-GCM. The cookie
//! value is `base64url(nonce || ciphertext || tag)`, and the cookie name is
//! bound in as associated data so a value cannot be replayed under another
//! cookie. Decoding fails closed: anything that does not authenticate under
//! the current key is [`SessionError::InvalidSession`].

use std::fmt;

use ring::aead::{AES_256_GCM, Aad, LessSafeKey, NONCE_LEN, Nonce, UnboundKey};
use ring::rand::{SecureRandom, SystemRandom};

use crate::session::errors::SessionError;
use crate::session::types::Session;
use crate::utils::{base64url_decode, base64url_encode, gen_random_bytes};

const KEY_LEN: usize = 32;

/// Process-wide secret for sealing session cookies.
#[derive(Clone)]
pub struct SessionKey([u8; KEY_LEN]);

impl SessionKey {
    pub fn generate() -> Result<Self, SessionError> {
        let bytes = gen_random_bytes(KEY_LEN)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_base64url(secret: &str) -> Result<Self, SessionError> {
        let bytes = base64url_decode(secret.trim())?;
        Self::from_bytes(&bytes)
    }

    pub fn to_base64url(&self) -> String {
        base64url_encode(&self.0)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        let key: [u8; KEY_LEN] = bytes.try_into().map_err(|_| {
            SessionError::Crypto(format!("Session key must be {KEY_LEN} bytes"))
        })?;
        Ok(Self(key))
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionKey(..)")
    }
}

pub struct SessionCodec {
    key: LessSafeKey,
    cookie_name: String,
    rng: SystemRandom,
}

impl fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCodec")
            .field("cookie_name", &self.cookie_name)
            .finish_non_exhaustive()
    }
}

impl SessionCodec {
    pub fn new(key: &SessionKey, cookie_name: impl Into<String>) -> Result<Self, SessionError> {
        let unbound = UnboundKey::new(&AES_256_GCM, &key.0)
            .map_err(|_| SessionError::Crypto("Invalid session key".to_string()))?;
        Ok(Self {
            key: LessSafeKey::new(unbound),
            cookie_name: cookie_name.into(),
            rng: SystemRandom::new(),
        })
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn encode(&self, session: &Session) -> Result<String, SessionError> {
        let mut in_out =
            serde_json::to_vec(session).map_err(|e| SessionError::Crypto(e.to_string()))?;

        let mut nonce_bytes = [0u8; NONCE_LEN];
        self.rng
            .fill(&mut nonce_bytes)
            .map_err(|_| SessionError::Crypto("Failed to generate nonce".to_string()))?;

        self.key
            .seal_in_place_append_tag(
                Nonce::assume_unique_for_key(nonce_bytes),
                Aad::from(self.cookie_name.as_bytes()),
                &mut in_out,
            )
            .map_err(|_| SessionError::Crypto("Failed to seal session".to_string()))?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + in_out.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&in_out);
        Ok(base64url_encode(&sealed))
    }

    pub fn decode(&self, value: &str) -> Result<Session, SessionError> {
        let raw = base64url_decode(value).map_err(|_| SessionError::InvalidSession)?;
        if raw.len() < NONCE_LEN + AES_256_GCM.tag_len() {
            return Err(SessionError::InvalidSession);
        }

        let (nonce_bytes, ciphertext) = raw.split_at(NONCE_LEN);
        let nonce = Nonce::try_assume_unique_for_key(nonce_bytes)
            .map_err(|_| SessionError::InvalidSession)?;

        let mut in_out = ciphertext.to_vec();
        let plaintext = self
            .key
            .open_in_place(nonce, Aad::from(self.cookie_name.as_bytes()), &mut in_out)
            .map_err(|_| SessionError::InvalidSession)?;

        serde_json::from_slice(plaintext).map_err(|_| SessionError::InvalidSession)
    }
}
