use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Opaque session identifier, fixed for the life of a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authenticated state of one browser, carried in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub csrf_token: Option<String>,
}

impl Session {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::new(),
            username: None,
            created_at,
            csrf_token: None,
        }
    }

    /// The principal, if the session carries a non-empty one.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at > ttl
    }

    /// Seconds left before `ttl` runs out, never negative.
    pub fn remaining_ttl(&self, now: DateTime<Utc>, ttl: Duration) -> i64 {
        (ttl - (now - self.created_at)).num_seconds().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_new_session_is_anonymous() {
        let session = Session::new(at(0));
        assert!(session.username().is_none());
        assert!(session.csrf_token.is_none());
        assert_eq!(session.created_at, at(0));
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn test_empty_username_counts_as_absent() {
        let mut session = Session::new(at(0));
        session.username = Some(String::new());
        assert!(session.username().is_none());

        session.username = Some("alice".to_string());
        assert_eq!(session.username(), Some("alice"));
    }

    #[test]
    fn test_expiry_boundary() {
        let session = Session::new(at(0));
        let ttl = Duration::seconds(300);

        assert!(!session.is_expired(at(299), ttl));
        assert!(!session.is_expired(at(300), ttl));
        assert!(session.is_expired(at(301), ttl));
    }

    #[test]
    fn test_remaining_ttl() {
        let session = Session::new(at(0));
        let ttl = Duration::seconds(300);

        assert_eq!(session.remaining_ttl(at(0), ttl), 300);
        assert_eq!(session.remaining_ttl(at(120), ttl), 180);
        assert_eq!(session.remaining_ttl(at(400), ttl), 0);
    }

    #[test]
    fn test_session_id_serializes_as_plain_string() {
        let id = SessionId::from("abc-123".to_string());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-123\"");
    }
}
