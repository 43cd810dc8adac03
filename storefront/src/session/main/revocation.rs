use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::session::types::SessionId;

/// Session ids logged out before their natural expiry.
///
/// An entry only needs to outlive the session it revokes, so entries older
/// than the session TTL are pruned before every lookup.
#[derive(Debug)]
pub struct RevocationRegistry {
    ttl: Duration,
    entries: Mutex<HashMap<SessionId, DateTime<Utc>>>,
}

impl RevocationRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub async fn revoke(&self, id: &SessionId, at: DateTime<Utc>) {
        tracing::debug!(session_id = %id, "Revoking session");
        self.entries.lock().await.insert(id.clone(), at);
    }

    pub async fn is_revoked(&self, id: &SessionId, now: DateTime<Utc>) -> bool {
        let mut entries = self.entries.lock().await;
        let ttl = self.ttl;
        entries.retain(|_, revoked_at| now - *revoked_at <= ttl);
        entries.contains_key(id)
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
