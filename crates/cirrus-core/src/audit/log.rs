//! Append-only audit log over a `StateStore`.

use super::model::{AuditEntry, AuditEvent};
use crate::storage::StateStore;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

/// Well-known store key for the serialized entry sequence.
pub const AUDIT_LOG_KEY: &str = "auditLog";

/// Fixed attribution for every entry. The log deliberately does not track
/// real session identity; callers that care put the user id in `meta`.
pub const PSEUDO_USER_ID: &str = "anonymous";

/// Append-only audit log.
///
/// Insertion order is chronological order. Reads never fail: missing or
/// corrupt raw data is an empty log. Writes that fail are dropped with a
/// warning; losing an entry is acceptable, breaking the caller is not.
#[derive(Clone)]
pub struct AuditLog {
    store: Arc<dyn StateStore>,
}

impl AuditLog {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Stamps `event` with the current time and pseudo-user id, appends it,
    /// and persists the log.
    pub fn record(&self, event: AuditEvent) {
        let entry = AuditEntry {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            user_id: PSEUDO_USER_ID.to_string(),
            action: event.action,
            outcome: event.outcome,
            query: event.query,
            message: event.message,
            meta: event.meta,
        };

        let mut entries = self.entries();
        entries.push(entry);

        match serde_json::to_string(&entries) {
            Ok(json) => {
                if let Err(err) = self.store.set(AUDIT_LOG_KEY, &json) {
                    tracing::warn!("dropping audit entry, store write failed: {}", err);
                }
            }
            Err(err) => tracing::warn!("dropping audit entry, serialization failed: {}", err),
        }
    }

    /// Returns all entries in insertion order.
    ///
    /// Missing, corrupt, or non-array raw data yields an empty vec; this
    /// never surfaces an error.
    pub fn entries(&self) -> Vec<AuditEntry> {
        let Some(raw) = self.store.get(AUDIT_LOG_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("treating corrupt audit log as empty: {}", err);
                Vec::new()
            }
        }
    }

    /// Removes all entries.
    pub fn clear(&self) {
        if let Err(err) = self.store.remove(AUDIT_LOG_KEY) {
            tracing::warn!("failed to clear audit log: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::model::{AuditAction, AuditOutcome};
    use crate::storage::MemoryStateStore;

    fn log_with_store() -> (AuditLog, Arc<MemoryStateStore>) {
        let store = Arc::new(MemoryStateStore::new());
        (AuditLog::new(store.clone()), store)
    }

    #[test]
    fn test_record_appends_exactly_one_entry() {
        let (log, _) = log_with_store();
        assert_eq!(log.entries().len(), 0);

        log.record(AuditEvent::new(AuditAction::Search, AuditOutcome::Success).with_query("Paris"));
        assert_eq!(log.entries().len(), 1);

        log.record(AuditEvent::new(AuditAction::Read, AuditOutcome::Error));
        let entries = log.entries();
        assert_eq!(entries.len(), 2);

        // Insertion order is preserved.
        assert_eq!(entries[0].action, AuditAction::Search);
        assert_eq!(entries[1].action, AuditAction::Read);
    }

    #[test]
    fn test_entries_are_stamped_with_pseudo_user_and_millis_utc() {
        let (log, _) = log_with_store();
        log.record(AuditEvent::new(AuditAction::AuthLogin, AuditOutcome::Success));

        let entry = &log.entries()[0];
        assert_eq!(entry.user_id, PSEUDO_USER_ID);
        // e.g. 2024-01-01T00:00:00.000Z
        assert!(entry.timestamp.ends_with('Z'), "not UTC: {}", entry.timestamp);
        let (_, fraction) = entry.timestamp.split_once('.').expect("no subseconds");
        assert_eq!(fraction.len(), "000Z".len(), "not millisecond precision");
        assert!(
            chrono::DateTime::parse_from_rfc3339(&entry.timestamp).is_ok(),
            "not ISO-8601: {}",
            entry.timestamp
        );
    }

    #[test]
    fn test_corrupt_raw_log_reads_as_empty_without_error() {
        let (log, store) = log_with_store();
        store.set(AUDIT_LOG_KEY, "{\"not\": \"an array\"").unwrap();
        assert!(log.entries().is_empty());

        store.set(AUDIT_LOG_KEY, "42").unwrap();
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_record_over_corrupt_log_starts_fresh() {
        let (log, store) = log_with_store();
        store.set(AUDIT_LOG_KEY, "garbage").unwrap();
        log.record(AuditEvent::new(AuditAction::Search, AuditOutcome::Success));
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn test_clear_empties_the_log() {
        let (log, _) = log_with_store();
        log.record(AuditEvent::new(AuditAction::Search, AuditOutcome::Success));
        log.record(AuditEvent::new(AuditAction::Read, AuditOutcome::Success));
        log.clear();
        assert!(log.entries().is_empty());
    }
}
