//! Session lifecycle over a `StateStore`.

use super::model::Session;
use crate::auth::AuthenticatedUser;
use crate::storage::StateStore;
use chrono::Duration;
use std::sync::Arc;

/// Well-known store key for the serialized session record.
pub const SESSION_KEY: &str = "app_session";

/// Default session lifetime: 2 hours.
pub const DEFAULT_SESSION_TTL_SECS: i64 = 2 * 60 * 60;

/// Manages the single active session in a `StateStore`.
///
/// Creating a new session overwrites any previous one. A record that is
/// missing, unparsable, or past its expiry reads as absent; the stale record
/// is deleted on read so it cannot resurface.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn StateStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Creates and persists a session for `user` with the given TTL.
    ///
    /// A store write failure is logged and swallowed: the session is still
    /// returned and simply will not survive a restart, matching how the
    /// original treated a full local storage.
    pub fn create(&self, user: &AuthenticatedUser, ttl: Duration) -> Session {
        let session = Session::issue(user, ttl);
        match serde_json::to_string(&session) {
            Ok(json) => {
                if let Err(err) = self.store.set(SESSION_KEY, &json) {
                    tracing::warn!("failed to persist session: {}", err);
                }
            }
            Err(err) => tracing::warn!("failed to serialize session: {}", err),
        }
        session
    }

    /// Creates a session with the default 2-hour TTL.
    pub fn create_default(&self, user: &AuthenticatedUser) -> Session {
        self.create(user, Duration::seconds(DEFAULT_SESSION_TTL_SECS))
    }

    /// Returns the current session, or `None` if missing, corrupt, or expired.
    ///
    /// Corrupt and expired records are removed as a side effect.
    pub fn current(&self) -> Option<Session> {
        let raw = self.store.get(SESSION_KEY)?;

        let session: Session = match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!("discarding unparsable session record: {}", err);
                self.clear();
                return None;
            }
        };

        if session.is_expired() {
            tracing::debug!(user_id = %session.user_id, "session expired");
            self.clear();
            return None;
        }

        Some(session)
    }

    /// Removes the stored session unconditionally.
    pub fn clear(&self) {
        if let Err(err) = self.store.remove(SESSION_KEY) {
            tracing::warn!("failed to clear session: {}", err);
        }
    }
}
