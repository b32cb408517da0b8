//! Login, logout, and authorization flows.
//!
//! Each flow leaves the audit entries the original left: `AUTH_LOGIN`
//! success/error on login attempts, `AUTH_LOGOUT` on logout, `AUTH_DENIED`
//! on refused role checks. Local field checks fail before authentication
//! and are not audited.

use cirrus_core::audit::{AuditAction, AuditEvent, AuditLog, AuditOutcome};
use cirrus_core::auth::{Authenticator, Credentials, Role, is_authorized};
use cirrus_core::error::{CirrusError, Result};
use cirrus_core::session::{Session, SessionManager};
use serde_json::json;

const IDENTIFIER_REQUIRED: &str = "Email/Username is required.";
const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
const MIN_PASSWORD_LEN: usize = 6;

/// Authentication use case: the session gate around the rest of the app.
#[derive(Clone)]
pub struct AuthUseCase {
    sessions: SessionManager,
    audit: AuditLog,
    authenticator: Authenticator,
}

impl AuthUseCase {
    pub fn new(sessions: SessionManager, audit: AuditLog, authenticator: Authenticator) -> Self {
        Self {
            sessions,
            audit,
            authenticator,
        }
    }

    /// Logs in with the given credentials and opens a session.
    ///
    /// Field checks run first and fail without an audit entry; a rejected
    /// authentication is audited as `AUTH_LOGIN`/`ERROR`, a success as
    /// `AUTH_LOGIN`/`SUCCESS`. The password is never logged or persisted.
    pub fn login(&self, credentials: &Credentials) -> Result<Session> {
        let identifier = credentials.identifier.trim();
        if identifier.is_empty() {
            return Err(CirrusError::auth(IDENTIFIER_REQUIRED));
        }
        if credentials.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CirrusError::auth(PASSWORD_TOO_SHORT));
        }

        let user = match self.authenticator.authenticate(credentials) {
            Ok(user) => user,
            Err(err) => {
                self.audit.record(
                    AuditEvent::new(AuditAction::AuthLogin, AuditOutcome::Error)
                        .with_message("Login failed")
                        .with_meta(json!({ "userId": identifier })),
                );
                return Err(err);
            }
        };

        let session = self.sessions.create_default(&user);
        tracing::info!(user_id = %user.id, role = %user.role, "login succeeded");
        self.audit.record(
            AuditEvent::new(AuditAction::AuthLogin, AuditOutcome::Success)
                .with_message("Login success")
                .with_meta(json!({ "userId": user.id, "role": user.role })),
        );

        Ok(session)
    }

    /// Clears the current session and audits the logout.
    pub fn logout(&self) {
        let user_id = self
            .sessions
            .current()
            .map(|session| session.user_id)
            .unwrap_or_else(|| "unknown".to_string());

        self.sessions.clear();
        tracing::info!(user_id = %user_id, "logged out");
        self.audit.record(
            AuditEvent::new(AuditAction::AuthLogout, AuditOutcome::Success)
                .with_message("User logged out")
                .with_meta(json!({ "userId": user_id })),
        );
    }

    /// Requires `required` of the current session.
    ///
    /// Denials (no session, or an insufficient role) are audited as
    /// `AUTH_DENIED`/`ERROR` and surface as `CirrusError::AccessDenied`.
    pub fn authorize(&self, required: Role) -> Result<Session> {
        let session = self.sessions.current();

        if is_authorized(required, session.as_ref()) {
            // is_authorized never passes an absent session
            return session.ok_or_else(|| CirrusError::internal("authorized without a session"));
        }

        let user_id = session
            .as_ref()
            .map(|s| s.user_id.clone())
            .unwrap_or_else(|| "anonymous".to_string());
        let role = session
            .as_ref()
            .map(|s| s.role.to_string())
            .unwrap_or_else(|| "none".to_string());

        self.audit.record(
            AuditEvent::new(AuditAction::AuthDenied, AuditOutcome::Error)
                .with_message(format!("Access denied: requires {required}"))
                .with_meta(json!({ "userId": user_id, "role": role })),
        );

        Err(CirrusError::AccessDenied { required })
    }

    /// The current session, if a valid unexpired one exists.
    pub fn current_session(&self) -> Option<Session> {
        self.sessions.current()
    }
}
