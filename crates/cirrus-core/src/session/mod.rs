//! Session domain module.
//!
//! A session is a time-boxed client-side record asserting who is currently
//! using the application and their role. It lives under a single well-known
//! store key; exactly one session is active at a time.
//!
//! # Module Structure
//!
//! - `model`: The session record (`Session`)
//! - `manager`: Lifecycle over a `StateStore` (`SessionManager`)

mod manager;
mod model;

// Re-export public API
pub use manager::{DEFAULT_SESSION_TTL_SECS, SESSION_KEY, SessionManager};
pub use model::Session;
