//! Application configuration models.
//!
//! Loading (config file + environment overrides) lives in the
//! infrastructure crate; these are the plain shapes it produces.

use crate::auth::Role;
use serde::{Deserialize, Serialize};

/// How credentials are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Any non-empty credential pair is accepted; role derived from the
    /// identifier. The demo default.
    #[default]
    Open,
    /// Credentials must match the configured user roster exactly.
    Roster,
}

impl std::str::FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(AuthMode::Open),
            "roster" => Ok(AuthMode::Roster),
            other => Err(format!("Unknown auth mode: {other}")),
        }
    }
}

/// One roster entry. The password is required; everything else is optional,
/// though an entry without an email or username can never match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// OpenWeatherMap API key. Present and non-blank selects live mode.
    #[serde(default)]
    pub openweather_api_key: Option<String>,
    #[serde(default)]
    pub auth_mode: AuthMode,
    #[serde(default)]
    pub auth_users: Vec<UserRecord>,
}

impl AppConfig {
    /// True when no usable API credential is configured, so weather data is
    /// synthesized rather than fetched.
    pub fn is_mock_mode(&self) -> bool {
        !self
            .openweather_api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}
