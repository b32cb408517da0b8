//! Configuration loading.
//!
//! Configuration comes from `~/.config/cirrus/config.toml`, with environment
//! variables taking precedence:
//!
//! - `CIRRUS_OPENWEATHER_API_KEY` — live-mode credential (presence selects
//!   live mode; never logged)
//! - `CIRRUS_AUTH_MODE` — `open` or `roster`
//! - `CIRRUS_AUTH_USERS` — JSON array of roster records
//!
//! A missing or empty config file yields defaults; a malformed roster parses
//! to an empty list rather than failing startup.

use cirrus_core::config::{AppConfig, UserRecord};
use std::env;
use std::fs;
use std::path::Path;

use crate::paths::CirrusPaths;

pub const ENV_API_KEY: &str = "CIRRUS_OPENWEATHER_API_KEY";
pub const ENV_AUTH_MODE: &str = "CIRRUS_AUTH_MODE";
pub const ENV_AUTH_USERS: &str = "CIRRUS_AUTH_USERS";

/// Loads configuration from the default file location plus the environment.
pub fn load_config() -> AppConfig {
    let file_config = match CirrusPaths::config_file() {
        Ok(path) => load_config_file(&path),
        Err(err) => {
            tracing::warn!("cannot resolve config path, using defaults: {}", err);
            AppConfig::default()
        }
    };

    apply_overrides(
        file_config,
        env::var(ENV_API_KEY).ok(),
        env::var(ENV_AUTH_MODE).ok(),
        env::var(ENV_AUTH_USERS).ok(),
    )
}

/// Reads and parses `config.toml`.
///
/// Missing file and empty file both yield defaults. A file that exists but
/// does not parse is reported and treated as defaults; startup never fails
/// on bad configuration.
pub fn load_config_file(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!("failed to read config file {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    if content.trim().is_empty() {
        return AppConfig::default();
    }

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("failed to parse config file {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

/// Applies environment overrides on top of the file configuration.
///
/// Pure so precedence is testable without touching the process environment.
pub fn apply_overrides(
    mut config: AppConfig,
    api_key: Option<String>,
    auth_mode: Option<String>,
    auth_users: Option<String>,
) -> AppConfig {
    if let Some(key) = api_key {
        if !key.trim().is_empty() {
            config.openweather_api_key = Some(key);
        }
    }

    if let Some(mode) = auth_mode {
        match mode.parse() {
            Ok(mode) => config.auth_mode = mode,
            Err(err) => tracing::warn!("ignoring {}: {}", ENV_AUTH_MODE, err),
        }
    }

    if let Some(raw) = auth_users {
        config.auth_users = parse_roster(&raw);
    }

    config
}

/// Parses the roster JSON. Anything other than a JSON array of records
/// (including parse failures) yields an empty roster.
pub fn parse_roster(raw: &str) -> Vec<UserRecord> {
    match serde_json::from_str::<Vec<UserRecord>>(raw) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!("ignoring malformed auth roster: {}", err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::auth::Role;
    use cirrus_core::config::AuthMode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_is_defaults() {
        let config = load_config_file(Path::new("/definitely/not/here.toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_file_then_env_precedence() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "openweather_api_key = \"from-file\"").unwrap();
        file.flush().unwrap();

        let from_file = load_config_file(file.path());
        assert_eq!(from_file.openweather_api_key.as_deref(), Some("from-file"));

        let merged = apply_overrides(
            from_file,
            Some("from-env".to_string()),
            Some("roster".to_string()),
            None,
        );
        assert_eq!(merged.openweather_api_key.as_deref(), Some("from-env"));
        assert_eq!(merged.auth_mode, AuthMode::Roster);
    }

    #[test]
    fn test_blank_env_key_does_not_override() {
        let config = AppConfig {
            openweather_api_key: Some("from-file".to_string()),
            ..Default::default()
        };
        let merged = apply_overrides(config, Some("  ".to_string()), None, None);
        assert_eq!(merged.openweather_api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_unknown_auth_mode_is_ignored() {
        let merged = apply_overrides(
            AppConfig::default(),
            None,
            Some("ldap".to_string()),
            None,
        );
        assert_eq!(merged.auth_mode, AuthMode::Open);
    }

    #[test]
    fn test_roster_parsing() {
        let records = parse_roster(
            r#"[{"username": "jane", "password": "pw-123456", "role": "admin"}]"#,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].username.as_deref(), Some("jane"));
        assert_eq!(records[0].role, Some(Role::Admin));
    }

    #[test]
    fn test_malformed_roster_is_empty() {
        assert!(parse_roster("not json").is_empty());
        assert!(parse_roster(r#"{"username": "jane"}"#).is_empty());
        assert!(parse_roster("[{\"username\": \"no-password\"}]").is_empty());
    }

    #[test]
    fn test_garbled_config_file_is_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is [not toml").unwrap();
        file.flush().unwrap();
        assert_eq!(load_config_file(file.path()), AppConfig::default());
    }
}
