//! Credential checking.
//!
//! Two modes, selected by configuration:
//! - **Roster**: credentials must exactly match an externally supplied list
//!   of `{email/username, password, role}` records.
//! - **Open**: any non-empty credential pair is accepted and the role is
//!   derived heuristically from the identifier. This is the demo fallback.

use super::model::{AuthenticatedUser, Credentials, Role};
use crate::config::{AuthMode, UserRecord};
use crate::error::{CirrusError, Result};

const MISSING_FIELDS: &str = "Please provide both email/username and password.";
const INVALID_CREDENTIALS: &str = "Invalid credentials.";

/// Checks credentials against the configured mode.
///
/// Never logs or stores the raw password; failure messages never reveal
/// which field was wrong.
#[derive(Debug, Clone)]
pub struct Authenticator {
    mode: AuthMode,
    roster: Vec<UserRecord>,
}

impl Authenticator {
    pub fn new(mode: AuthMode, roster: Vec<UserRecord>) -> Self {
        Self { mode, roster }
    }

    /// Open-mode authenticator with no roster.
    pub fn open() -> Self {
        Self::new(AuthMode::Open, Vec::new())
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Number of roster entries (for diagnostics; never the entries themselves).
    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    /// Authenticates the given credentials.
    ///
    /// # Errors
    ///
    /// - `CirrusError::Auth` with a generic "provide both fields" message if
    ///   either field is empty
    /// - `CirrusError::Auth` with "Invalid credentials." on a roster mismatch
    pub fn authenticate(&self, credentials: &Credentials) -> Result<AuthenticatedUser> {
        let identifier = credentials.identifier.trim();
        if identifier.is_empty() || credentials.password.is_empty() {
            return Err(CirrusError::auth(MISSING_FIELDS));
        }

        match self.mode {
            AuthMode::Roster => self.authenticate_roster(identifier, &credentials.password),
            AuthMode::Open => Ok(Self::open_mode_user(identifier)),
        }
    }

    fn authenticate_roster(&self, identifier: &str, password: &str) -> Result<AuthenticatedUser> {
        let identifier_lower = identifier.to_lowercase();
        let matched = self.roster.iter().find(|record| {
            let matches_id = record
                .email
                .as_deref()
                .is_some_and(|email| email.to_lowercase() == identifier_lower)
                || record
                    .username
                    .as_deref()
                    .is_some_and(|username| username.to_lowercase() == identifier_lower);
            matches_id && record.password == password
        });

        let Some(record) = matched else {
            tracing::debug!(identifier, "roster authentication failed");
            return Err(CirrusError::auth(INVALID_CREDENTIALS));
        };

        let id = record
            .id
            .clone()
            .or_else(|| record.email.clone())
            .or_else(|| record.username.clone())
            .unwrap_or_else(|| identifier.to_string());

        Ok(AuthenticatedUser {
            id,
            email: record.email.clone(),
            username: record.username.clone(),
            role: record.role.unwrap_or_default(),
        })
    }

    /// Open mode: accept any non-empty pair and derive the identity shape
    /// from the identifier. Identifiers that look like "admin..." get the
    /// admin role.
    fn open_mode_user(identifier: &str) -> AuthenticatedUser {
        let looks_like_email = identifier.contains('@');
        let role = if identifier.to_lowercase().starts_with("admin") {
            Role::Admin
        } else {
            Role::User
        };

        AuthenticatedUser {
            id: identifier.to_string(),
            email: looks_like_email.then(|| identifier.to_string()),
            username: (!looks_like_email).then(|| identifier.to_string()),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<UserRecord> {
        vec![
            UserRecord {
                id: Some("u-1".to_string()),
                email: Some("jane@example.com".to_string()),
                username: None,
                password: "hunter22".to_string(),
                role: Some(Role::User),
            },
            UserRecord {
                id: None,
                email: None,
                username: Some("ops".to_string()),
                password: "let-me-in".to_string(),
                role: Some(Role::Admin),
            },
        ]
    }

    #[test]
    fn test_missing_fields_gives_generic_error() {
        let auth = Authenticator::open();
        for (id, pw) in [("", "secret"), ("jane", ""), ("  ", "secret")] {
            let err = auth
                .authenticate(&Credentials::new(id, pw))
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                "Please provide both email/username and password."
            );
        }
    }

    #[test]
    fn test_roster_exact_match() {
        let auth = Authenticator::new(AuthMode::Roster, roster());
        let user = auth
            .authenticate(&Credentials::new("jane@example.com", "hunter22"))
            .unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.role, Role::User);

        let admin = auth
            .authenticate(&Credentials::new("ops", "let-me-in"))
            .unwrap();
        assert_eq!(admin.id, "ops");
        assert_eq!(admin.role, Role::Admin);
    }

    #[test]
    fn test_roster_identifier_is_case_insensitive_password_is_not() {
        let auth = Authenticator::new(AuthMode::Roster, roster());
        assert!(
            auth.authenticate(&Credentials::new("JANE@Example.COM", "hunter22"))
                .is_ok()
        );
        let err = auth
            .authenticate(&Credentials::new("jane@example.com", "HUNTER22"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials.");
    }

    #[test]
    fn test_roster_unknown_identifier() {
        let auth = Authenticator::new(AuthMode::Roster, roster());
        let err = auth
            .authenticate(&Credentials::new("nobody", "whatever"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials.");
    }

    #[test]
    fn test_open_mode_admin_heuristic() {
        let auth = Authenticator::open();
        let admin = auth
            .authenticate(&Credentials::new("adminUser", "password1"))
            .unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.username.as_deref(), Some("adminUser"));
        assert_eq!(admin.email, None);

        let user = auth
            .authenticate(&Credentials::new("jane", "password1"))
            .unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_open_mode_email_detection() {
        let auth = Authenticator::open();
        let user = auth
            .authenticate(&Credentials::new("admin@corp.example", "password1"))
            .unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.email.as_deref(), Some("admin@corp.example"));
        assert_eq!(user.username, None);
    }
}
