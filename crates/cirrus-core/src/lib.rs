//! Cirrus domain layer.
//!
//! Pure application logic for the weather console: input validation, the
//! client-side session gate, role authorization, the append-only audit
//! trail, and the deterministic mock weather generator. Storage and HTTP
//! live behind the `StateStore` and `WeatherProvider` traits, implemented
//! in `cirrus-infrastructure`.

pub mod audit;
pub mod auth;
pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod validation;
pub mod weather;

// Re-export common error type
pub use error::{CirrusError, Result};
