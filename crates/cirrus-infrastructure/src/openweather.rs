//! OpenWeatherMap client - live-mode `WeatherProvider`.
//!
//! Issues one GET per search against the current-weather endpoint and
//! normalizes the provider payload into a `WeatherReading`. Failure messages
//! are the user-facing ones; transport details only reach the debug log.

use async_trait::async_trait;
use cirrus_core::error::{CirrusError, Result};
use cirrus_core::weather::{WeatherProvider, WeatherReading, icon_url};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

const CITY_NOT_FOUND: &str = "City not found. Please check the spelling.";
const SERVICE_ERROR: &str = "Weather service error. Please try again later.";

/// Live weather lookup against OpenWeatherMap.
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    /// Creates a client with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Overrides the endpoint after construction.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_by_city(&self, city: &str) -> Result<WeatherReading> {
        tracing::debug!(city, "fetching current weather");

        // Transport failures convert to the user-facing network message via
        // From<reqwest::Error>; the cause is logged there, not shown.
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        map_status(response.status())?;

        let payload: CurrentWeatherResponse = response.json().await.map_err(|err| {
            tracing::debug!("unreadable weather payload: {}", err);
            CirrusError::service(SERVICE_ERROR)
        })?;

        Ok(normalize(city, payload))
    }
}

/// Maps a response status to the user-facing error taxonomy.
fn map_status(status: StatusCode) -> Result<()> {
    if status == StatusCode::NOT_FOUND {
        return Err(CirrusError::not_found(CITY_NOT_FOUND));
    }
    if !status.is_success() {
        tracing::debug!(%status, "weather service returned non-success");
        return Err(CirrusError::service(SERVICE_ERROR));
    }
    Ok(())
}

// ============================================================================
// Provider payload (only the fields we read; everything optional so a
// partial payload degrades to defaults instead of a parse failure)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct CurrentWeatherResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    sys: Option<SysSection>,
    #[serde(default)]
    weather: Vec<WeatherSection>,
    #[serde(default)]
    main: Option<MainSection>,
    #[serde(default)]
    wind: Option<WindSection>,
}

#[derive(Debug, Default, Deserialize)]
struct SysSection {
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WeatherSection {
    #[serde(default)]
    main: Option<String>,
    #[serde(default)]
    icon: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct MainSection {
    #[serde(default)]
    temp: Option<f64>,
    #[serde(default)]
    humidity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct WindSection {
    /// Meters per second (metric units)
    #[serde(default)]
    speed: Option<f64>,
}

/// Normalizes a provider payload into a `WeatherReading`.
///
/// Temperature rounds to the nearest degree; wind converts from m/s to km/h
/// (× 3.6, rounded). Missing fields fall back: the queried city name, empty
/// country, `Clear`/`01d` condition and icon, zeroes for measurements.
fn normalize(query: &str, payload: CurrentWeatherResponse) -> WeatherReading {
    let head = payload.weather.first();
    let icon = head
        .and_then(|w| w.icon.as_deref())
        .unwrap_or("01d");
    let condition = head
        .and_then(|w| w.main.clone())
        .unwrap_or_else(|| "Clear".to_string());

    let city = match payload.name {
        Some(name) if !name.is_empty() => name,
        _ => query.to_string(),
    };

    let main = payload.main.unwrap_or_default();
    let wind_ms = payload.wind.and_then(|w| w.speed).unwrap_or(0.0);

    WeatherReading {
        city,
        country: payload
            .sys
            .and_then(|s| s.country)
            .unwrap_or_default(),
        temp_c: main.temp.unwrap_or(0.0).round() as i32,
        condition,
        humidity: main.humidity.unwrap_or(0.0).round() as u32,
        wind_kph: (wind_ms * 3.6).round() as u32,
        icon_url: icon_url(icon),
        mock: false,
    }
}
