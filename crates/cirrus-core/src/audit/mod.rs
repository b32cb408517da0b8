//! Audit trail domain module.
//!
//! An append-only, timestamped record of user-triggered actions and their
//! outcomes, kept locally for traceability. Entries are immutable once
//! appended; the log is only ever cleared wholesale.
//!
//! # Module Structure
//!
//! - `model`: Actions, outcomes, and the entry record
//! - `log`: The append/read/clear service over a `StateStore`

mod log;
mod model;

// Re-export public API
pub use log::{AUDIT_LOG_KEY, AuditLog, PSEUDO_USER_ID};
pub use model::{AuditAction, AuditEntry, AuditEvent, AuditOutcome};
