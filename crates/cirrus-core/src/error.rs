//! Error types for the Cirrus application.

use crate::auth::Role;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Cirrus application.
///
/// Variants carry the user-facing message where one exists, so callers can
/// surface them directly and audit them without re-mapping.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum CirrusError {
    /// Invalid user input (e.g., a malformed city query)
    #[error("{0}")]
    Validation(String),

    /// Authentication failure (bad or missing credentials)
    #[error("{0}")]
    Auth(String),

    /// Authorization failure (session lacks the required role)
    #[error("Access denied: requires {required}")]
    AccessDenied { required: Role },

    /// Lookup target does not exist (e.g., unknown city)
    #[error("{0}")]
    NotFound(String),

    /// Transport-level failure reaching an external service
    #[error("{0}")]
    Network(String),

    /// External service responded, but not successfully
    #[error("{0}")]
    Service(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CirrusError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an Auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Service error
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an Auth error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Check if this is an AccessDenied error
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a Network or Service error (weather lookup failures)
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Service(_) | Self::NotFound(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CirrusError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CirrusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CirrusError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Transport errors collapse into the user-facing network message; the
/// underlying cause is only ever logged, never shown.
impl From<reqwest::Error> for CirrusError {
    fn from(err: reqwest::Error) -> Self {
        tracing::debug!("transport error: {}", err);
        Self::Network("Network error: Unable to reach weather service.".to_string())
    }
}

impl From<String> for CirrusError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, CirrusError>`.
pub type Result<T> = std::result::Result<T, CirrusError>;
