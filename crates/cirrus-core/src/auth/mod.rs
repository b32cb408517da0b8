//! Authentication and authorization domain module.
//!
//! This is a client-side gate, not a trust boundary: nothing here verifies a
//! token against a server. It simulates authentication well enough to drive
//! role-gated navigation and the audit trail.
//!
//! # Module Structure
//!
//! - `model`: Roles, credentials, and the authenticated-user record
//! - `authenticator`: Roster-based and open-mode credential checks
//! - `authorize`: Pure role check against a session

mod authenticator;
mod authorize;
mod model;

// Re-export public API
pub use authenticator::Authenticator;
pub use authorize::is_authorized;
pub use model::{AuthenticatedUser, Credentials, Role};
