//! Session record.

use crate::auth::{AuthenticatedUser, Role};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client-side session record.
///
/// The token is an opaque random id, not a verified credential: no server
/// ever checks it, so this record gates navigation and nothing more. It
/// never contains secret material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque random token (uuid v4; not cryptographically load-bearing)
    pub token: String,
    /// Identity the session was issued for
    pub user_id: String,
    /// Authorization level
    pub role: Role,
    /// Email, when the identifier looked like one
    pub email: Option<String>,
    /// Username, when the identifier did not look like an email
    pub username: Option<String>,
    /// Issue timestamp (UTC)
    pub issued_at: DateTime<Utc>,
    /// Past this instant the session reads as absent
    pub expiry: DateTime<Utc>,
}

impl Session {
    /// Issues a fresh session for `user`, valid for `ttl` from now.
    pub fn issue(user: &AuthenticatedUser, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token: Uuid::new_v4().to_string(),
            user_id: user.id.clone(),
            role: user.role,
            email: user.email.clone(),
            username: user.username.clone(),
            issued_at: now,
            expiry: now + ttl,
        }
    }

    /// Whether the session has passed its expiry at instant `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expiry
    }

    /// Whether the session has passed its expiry.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            id: "jane".to_string(),
            email: None,
            username: Some("jane".to_string()),
            role,
        }
    }

    #[test]
    fn test_issue_copies_identity_without_secrets() {
        let session = Session::issue(&user(Role::Admin), Duration::hours(2));
        assert_eq!(session.user_id, "jane");
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.username.as_deref(), Some("jane"));
        assert!(!session.token.is_empty());
        assert!(session.expiry > session.issued_at);
    }

    #[test]
    fn test_tokens_are_unique_per_issue() {
        let a = Session::issue(&user(Role::User), Duration::hours(2));
        let b = Session::issue(&user(Role::User), Duration::hours(2));
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_expiry_check() {
        let session = Session::issue(&user(Role::User), Duration::seconds(1));
        assert!(!session.is_expired_at(session.issued_at));
        assert!(session.is_expired_at(session.expiry + Duration::seconds(1)));
    }

    #[test]
    fn test_json_roundtrip() {
        let session = Session::issue(&user(Role::User), Duration::hours(2));
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
