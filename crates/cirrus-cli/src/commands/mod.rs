pub mod admin;
pub mod audit;
pub mod login;
pub mod logout;
pub mod search;
pub mod whoami;

use anyhow::Result;
use cirrus_application::AppContext;
use cirrus_core::auth::Authenticator;
use cirrus_core::storage::StateStore;
use cirrus_core::weather::{MockWeatherProvider, WeatherProvider};
use cirrus_infrastructure::{JsonFileStore, OpenWeatherClient, load_config};
use std::io::Write;
use std::sync::Arc;

/// Builds the application context from configuration and the on-disk store.
///
/// A present, non-blank API key selects the live provider; otherwise every
/// search is served by the deterministic mock generator.
pub fn build_context() -> Result<AppContext> {
    let config = load_config();

    let store: Arc<dyn StateStore> = Arc::new(JsonFileStore::default_location()?);
    let authenticator = Authenticator::new(config.auth_mode, config.auth_users.clone());

    let weather: Arc<dyn WeatherProvider> = match config.openweather_api_key.as_deref() {
        Some(key) if !key.trim().is_empty() => Arc::new(OpenWeatherClient::new(key)),
        _ => Arc::new(MockWeatherProvider),
    };

    Ok(AppContext::new(config, store, authenticator, weather))
}

/// Reads one line from stdin after printing `label`.
pub(crate) fn prompt(label: &str) -> cirrus_core::Result<String> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
