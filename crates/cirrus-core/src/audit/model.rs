//! Audit trail records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fixed set of auditable actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Search,
    Read,
    AuthLogin,
    AuthLogout,
    AuthDenied,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Search => "SEARCH",
            AuditAction::Read => "READ",
            AuditAction::AuthLogin => "AUTH_LOGIN",
            AuditAction::AuthLogout => "AUTH_LOGOUT",
            AuditAction::AuthDenied => "AUTH_DENIED",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the audited action succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditOutcome {
    Success,
    Error,
}

impl std::fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AuditOutcome::Success => "SUCCESS",
            AuditOutcome::Error => "ERROR",
        })
    }
}

/// What a caller hands to the audit log: everything except the timestamp
/// and attribution, which the log stamps itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub outcome: AuditOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl AuditEvent {
    pub fn new(action: AuditAction, outcome: AuditOutcome) -> Self {
        Self {
            action,
            outcome,
            query: None,
            message: None,
            meta: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// A persisted audit entry. Immutable once appended.
///
/// The timestamp is an ISO-8601 UTC string with millisecond precision,
/// stored as text so existing entries survive byte-for-byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: String,
    /// Fixed pseudo-user attribution, independent of session identity.
    pub user_id: String,
    pub action: AuditAction,
    pub outcome: AuditOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&AuditAction::AuthDenied).unwrap(),
            "\"AUTH_DENIED\""
        );
        assert_eq!(
            serde_json::from_str::<AuditAction>("\"SEARCH\"").unwrap(),
            AuditAction::Search
        );
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(AuditOutcome::Success.to_string(), "SUCCESS");
        assert_eq!(AuditOutcome::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_event_builder() {
        let event = AuditEvent::new(AuditAction::Read, AuditOutcome::Error)
            .with_query("Paris")
            .with_message("boom")
            .with_meta(serde_json::json!({"mock": true}));
        assert_eq!(event.query.as_deref(), Some("Paris"));
        assert_eq!(event.message.as_deref(), Some("boom"));
        assert_eq!(event.meta, Some(serde_json::json!({"mock": true})));
    }

    #[test]
    fn test_optional_fields_are_omitted_from_json() {
        let entry = AuditEntry {
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            user_id: "anonymous".to_string(),
            action: AuditAction::Search,
            outcome: AuditOutcome::Success,
            query: None,
            message: None,
            meta: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("query"));
        assert!(!json.contains("meta"));
    }
}
