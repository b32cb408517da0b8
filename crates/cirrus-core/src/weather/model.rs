//! Weather reading model.

use serde::{Deserialize, Serialize};

/// The seven canonical conditions, in the order the mock generator indexes
/// them. Live readings may carry other condition strings; this enum only
/// drives mock generation and icon selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
}

/// Index order is load-bearing: `seed % 7` picks from this array.
pub const CONDITIONS: [Condition; 7] = [
    Condition::Clear,
    Condition::Clouds,
    Condition::Rain,
    Condition::Drizzle,
    Condition::Thunderstorm,
    Condition::Snow,
    Condition::Mist,
];

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Drizzle => "Drizzle",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Snow => "Snow",
            Condition::Mist => "Mist",
        }
    }

    /// OpenWeatherMap icon code for this condition.
    pub fn icon_code(&self) -> &'static str {
        match self {
            Condition::Clear => "01d",
            Condition::Clouds => "02d",
            Condition::Rain => "10d",
            Condition::Drizzle => "09d",
            Condition::Thunderstorm => "11d",
            Condition::Snow => "13d",
            Condition::Mist => "50d",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the provider icon URL for an icon code.
pub fn icon_url(icon_code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon_code}@2x.png")
}

/// One weather observation for a city. Transient: recomputed per search,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub country: String,
    pub temp_c: i32,
    /// Condition name as reported by the provider (one of the seven
    /// canonical names in mock mode; free-form in live mode).
    pub condition: String,
    pub humidity: u32,
    pub wind_kph: u32,
    pub icon_url: String,
    /// True when synthesized rather than fetched.
    pub mock: bool,
}
