use std::sync::Arc;

use chrono::Duration;
use http::HeaderMap;

use crate::clock::Clock;
use crate::session::errors::SessionError;
use crate::session::types::Session;

use super::revocation::RevocationRegistry;
use super::store::SessionStore;

/// Admission decision for protected routes.
///
/// A request is admitted only when its cookie decodes, names a user, has not
/// been revoked by a logout and is younger than the session TTL.
#[derive(Debug, Clone)]
pub struct AuthGate {
    sessions: Arc<SessionStore>,
    revocations: Arc<RevocationRegistry>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl AuthGate {
    pub fn new(
        sessions: Arc<SessionStore>,
        revocations: Arc<RevocationRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let ttl = sessions.config().ttl_duration();
        Self {
            sessions,
            revocations,
            clock,
            ttl,
        }
    }

    /// Return the authenticated session carried by `headers`, or why it was refused.
    pub async fn authorize(&self, headers: &HeaderMap) -> Result<Session, SessionError> {
        let session = self.sessions.get(headers).await?;

        if session.username().is_none() {
            return Err(SessionError::InvalidSession);
        }

        let now = self.clock.now();
        if self.revocations.is_revoked(&session.id, now).await {
            return Err(SessionError::RevokedSession);
        }

        if session.is_expired(now, self.ttl) {
            return Err(SessionError::ExpiredSession);
        }

        Ok(session)
    }
}
