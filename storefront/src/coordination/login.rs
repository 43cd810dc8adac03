use http::HeaderMap;

use crate::session::Session;

use super::errors::CoordinationError;
use super::state::Storefront;

impl Storefront {
    /// Check the credentials and, on success, open a fresh session.
    ///
    /// Returns the `Set-Cookie` header for the new session. Any session the
    /// browser already had is left alone and replaced by the new cookie.
    #[tracing::instrument(skip(self, password))]
    pub async fn login_core(
        &self,
        username: &str,
        password: &str,
    ) -> Result<HeaderMap, CoordinationError> {
        if username.is_empty() || !self.verifier.verify(username, password).await? {
            return Err(CoordinationError::BadCredentials.log());
        }

        let mut session = self.sessions.create();
        session.username = Some(username.to_string());

        let ttl = self.sessions.config().ttl as i64;
        let headers = self.sessions.save(&session, ttl).await?;

        tracing::info!(session_id = %session.id, "User logged in");
        Ok(headers)
    }

    /// Gate decision for a protected request.
    pub async fn authorize(&self, headers: &HeaderMap) -> Result<Session, CoordinationError> {
        self.gate.authorize(headers).await.map_err(|e| {
            tracing::debug!(reason = %e, "Request refused by auth gate");
            CoordinationError::Unauthorized
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{cookie_header_from, test_storefront};
    use http::header::SET_COOKIE;

    #[tokio::test]
    async fn test_login_sets_session_cookie() {
        // Given a known user
        let (storefront, _clock, _notifier) = test_storefront();

        // When they log in with the right password
        let headers = storefront.login_core("alice", "wonderland").await.unwrap();

        // Then a session cookie with the full TTL is issued and admits them
        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("sessionId="));
        assert!(cookie.contains("Max-Age=300"));
        assert!(cookie.contains("HttpOnly"));

        let session = storefront.authorize(&cookie_header_from(&headers)).await.unwrap();
        assert_eq!(session.username(), Some("alice"));
        assert!(session.csrf_token.is_none());
    }

    #[tokio::test]
    async fn test_login_rejects_bad_password_and_unknown_user() {
        let (storefront, _clock, _notifier) = test_storefront();

        assert_eq!(
            storefront.login_core("alice", "nope").await,
            Err(CoordinationError::BadCredentials)
        );
        assert_eq!(
            storefront.login_core("nobody", "wonderland").await,
            Err(CoordinationError::BadCredentials)
        );
        assert_eq!(
            storefront.login_core("", "").await,
            Err(CoordinationError::BadCredentials)
        );
        assert!(storefront.sessions().is_empty().await);
    }

    #[tokio::test]
    async fn test_each_login_gets_a_new_session() {
        let (storefront, _clock, _notifier) = test_storefront();
        let first = storefront.login_core("alice", "wonderland").await.unwrap();
        let second = storefront.login_core("alice", "wonderland").await.unwrap();

        let a = storefront.authorize(&cookie_header_from(&first)).await.unwrap();
        let b = storefront.authorize(&cookie_header_from(&second)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_authorize_without_cookie_is_unauthorized() {
        let (storefront, _clock, _notifier) = test_storefront();
        assert_eq!(
            storefront.authorize(&HeaderMap::new()).await,
            Err(CoordinationError::Unauthorized)
        );
    }
}
