use std::collections::HashMap;
use std::sync::Arc;

use http::HeaderMap;
use tokio::sync::Mutex;

use crate::clock::Clock;
use crate::session::config::SessionConfig;
use crate::session::errors::SessionError;
use crate::session::types::{Session, SessionId};
use crate::utils::{CookieSpec, cookie_value_from_headers, header_set_cookie};

use super::codec::SessionCodec;

/// In-process session store backed by encrypted, self-describing cookies.
///
/// The map holds the canonical copy of every session this process has saved.
/// The cookie carries a sealed snapshot so that a session survives a restart;
/// a cookie for an id the map has never seen is adopted as-is.
#[derive(Debug)]
pub struct SessionStore {
    codec: SessionCodec,
    config: SessionConfig,
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<SessionId, Session>>,
}

impl SessionStore {
    pub fn new(codec: SessionCodec, config: SessionConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            codec,
            config,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read and decode the session cookie from request headers.
    #[tracing::instrument(skip_all)]
    pub async fn get(&self, headers: &HeaderMap) -> Result<Session, SessionError> {
        let value = cookie_value_from_headers(headers, &self.config.cookie_name)
            .map_err(|_| SessionError::InvalidSession)?
            .ok_or(SessionError::NotFound)?;

        let from_cookie = self.codec.decode(value)?;

        let mut entries = self.entries.lock().await;
        match entries.get(&from_cookie.id) {
            Some(canonical) if canonical.username != from_cookie.username => {
                tracing::warn!("Session cookie disagrees with the in-process copy");
                Err(SessionError::InvalidSession)
            }
            Some(canonical) => Ok(canonical.clone()),
            None => {
                entries.insert(from_cookie.id.clone(), from_cookie.clone());
                Ok(from_cookie)
            }
        }
    }

    /// A fresh, anonymous session created now.
    pub fn create(&self) -> Session {
        Session::new(self.clock.now())
    }

    /// Record `session` as the canonical in-process copy without touching the cookie.
    pub async fn put(&self, session: &Session) {
        self.entries
            .lock()
            .await
            .insert(session.id.clone(), session.clone());
    }

    /// Store `session` and return the `Set-Cookie` header carrying it.
    pub async fn save(&self, session: &Session, max_age: i64) -> Result<HeaderMap, SessionError> {
        let value = self.codec.encode(session)?;

        {
            let now = self.clock.now();
            let ttl = self.config.ttl_duration();
            let mut entries = self.entries.lock().await;
            entries.retain(|_, s| !s.is_expired(now, ttl));
            entries.insert(session.id.clone(), session.clone());
        }

        let mut headers = HeaderMap::new();
        header_set_cookie(
            &mut headers,
            CookieSpec {
                name: &self.config.cookie_name,
                value: &value,
                max_age,
                secure: self.config.secure_cookie,
            },
        )?;
        Ok(headers)
    }

    /// Save with whatever lifetime the session has left.
    pub async fn save_remaining(&self, session: &Session) -> Result<HeaderMap, SessionError> {
        let max_age = session.remaining_ttl(self.clock.now(), self.config.ttl_duration());
        self.save(session, max_age).await
    }

    /// Forget the in-process copy of a session.
    pub async fn invalidate(&self, id: &SessionId) {
        self.entries.lock().await.remove(id);
    }

    /// An empty session cookie with a negative max-age, deleting it client-side.
    pub fn expire_cookie(&self) -> Result<HeaderMap, SessionError> {
        let mut headers = HeaderMap::new();
        header_set_cookie(
            &mut headers,
            CookieSpec {
                name: &self.config.cookie_name,
                value: "",
                max_age: -1,
                secure: self.config.secure_cookie,
            },
        )?;
        Ok(headers)
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::session::main::codec::SessionKey;
    use crate::test_utils::{cookie_header_from, epoch};
    use chrono::Duration;
    use http::header::SET_COOKIE;

    fn store_with_clock() -> (SessionStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(epoch()));
        let key = SessionKey::generate().unwrap();
        let codec = SessionCodec::new(&key, "sessionId").unwrap();
        let store = SessionStore::new(codec, SessionConfig::default(), clock.clone());
        (store, clock)
    }

    #[tokio::test]
    async fn test_create_is_anonymous_and_timestamped() {
        let (store, _clock) = store_with_clock();
        let session = store.create();

        assert!(session.username().is_none());
        assert!(session.csrf_token.is_none());
        assert_eq!(session.created_at, epoch());
    }

    #[tokio::test]
    async fn test_get_without_cookie_is_not_found() {
        let (store, _clock) = store_with_clock();
        let result = store.get(&HeaderMap::new()).await;
        assert_eq!(result, Err(SessionError::NotFound));
    }

    #[tokio::test]
    async fn test_save_then_get_roundtrip() {
        let (store, _clock) = store_with_clock();
        let mut session = store.create();
        session.username = Some("alice".to_string());

        let headers = store.save(&session, 300).await.unwrap();
        let request = cookie_header_from(&headers);

        let loaded = store.get(&request).await.unwrap();
        assert_eq!(loaded, session);
    }

    #[tokio::test]
    async fn test_get_tampered_cookie_is_invalid() {
        let (store, _clock) = store_with_clock();
        let mut request = HeaderMap::new();
        request.insert(
            http::header::COOKIE,
            "sessionId=AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"
                .parse()
                .unwrap(),
        );
        assert_eq!(store.get(&request).await, Err(SessionError::InvalidSession));
    }

    #[tokio::test]
    async fn test_get_prefers_in_process_copy() {
        let (store, _clock) = store_with_clock();
        let mut session = store.create();
        session.username = Some("alice".to_string());
        session.csrf_token = Some("old".to_string());
        let request = cookie_header_from(&store.save(&session, 300).await.unwrap());

        // A later request cleared the token without the browser getting a new cookie
        session.csrf_token = None;
        store.put(&session).await;

        let loaded = store.get(&request).await.unwrap();
        assert_eq!(loaded.csrf_token, None);
    }

    #[tokio::test]
    async fn test_get_adopts_unknown_cookie() {
        let (store, _clock) = store_with_clock();
        let mut session = store.create();
        session.username = Some("alice".to_string());
        let request = cookie_header_from(&store.save(&session, 300).await.unwrap());

        // Simulate a process that has never seen this session
        store.invalidate(&session.id).await;
        assert!(store.is_empty().await);

        let loaded = store.get(&request).await.unwrap();
        assert_eq!(loaded, session);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_rejects_principal_mismatch() {
        let (store, _clock) = store_with_clock();
        let mut session = store.create();
        session.username = Some("alice".to_string());
        let request = cookie_header_from(&store.save(&session, 300).await.unwrap());

        session.username = Some("mallory".to_string());
        store.put(&session).await;

        assert_eq!(store.get(&request).await, Err(SessionError::InvalidSession));
    }

    #[tokio::test]
    async fn test_save_sweeps_expired_entries() {
        let (store, clock) = store_with_clock();
        let old = store.create();
        store.save(&old, 300).await.unwrap();

        clock.advance(Duration::seconds(301));
        let fresh = store.create();
        store.save(&fresh, 300).await.unwrap();

        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_save_remaining_uses_leftover_lifetime() {
        let (store, clock) = store_with_clock();
        let session = store.create();
        clock.advance(Duration::seconds(120));

        let headers = store.save_remaining(&session).await.unwrap();
        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.contains("Max-Age=180"));
    }

    #[tokio::test]
    async fn test_expire_cookie() {
        let (store, _clock) = store_with_clock();
        let headers = store.expire_cookie().unwrap();
        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("sessionId=;"));
        assert!(cookie.contains("Max-Age=-1"));
    }
}
