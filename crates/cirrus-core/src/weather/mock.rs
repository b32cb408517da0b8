//! Deterministic mock weather generator.
//!
//! Used whenever no API credential is configured. The profile is a pure
//! function of the city name, so the same query always yields the same
//! reading and tests can pin exact fixtures.

use super::model::{CONDITIONS, WeatherReading, icon_url};

/// Synthesizes a reading for `city`.
///
/// The seed is the sum of the character codes of the lower-cased city name.
/// Ranges are fixed: temperature 15..=29 °C, humidity 40..=89 %, wind
/// 4..=23 km/h, condition picked by `seed % 7` from the canonical order.
/// Country is always `"XX"` and `mock` is always true.
pub fn mock_reading(city: &str) -> WeatherReading {
    let seed: u32 = city.to_lowercase().chars().map(|c| c as u32).sum();

    let temp_c = 15 + (seed % 15) as i32;
    let humidity = 40 + (seed % 50);
    let wind_kph = 4 + (seed % 20);
    let condition = CONDITIONS[(seed % CONDITIONS.len() as u32) as usize];

    WeatherReading {
        city: city.to_string(),
        country: "XX".to_string(),
        temp_c,
        condition: condition.as_str().to_string(),
        humidity,
        wind_kph,
        icon_url: icon_url(condition.icon_code()),
        mock: true,
    }
}
