//! Weather lookup trait.

use super::mock::mock_reading;
use super::model::WeatherReading;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract current-weather lookup.
///
/// Implementations take a validated city query and produce one reading.
/// The live HTTP implementation lives in the infrastructure crate; the mock
/// implementation below is pure and never fails.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches the current weather for `city`.
    ///
    /// # Errors
    ///
    /// - `CirrusError::Network` when the service cannot be reached
    /// - `CirrusError::NotFound` when the city is unknown
    /// - `CirrusError::Service` on any other non-success response
    async fn current_by_city(&self, city: &str) -> Result<WeatherReading>;

    /// Whether readings are synthesized rather than fetched.
    fn is_mock(&self) -> bool {
        false
    }
}

/// Mock-mode provider: deterministic synthetic readings, no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockWeatherProvider;

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn current_by_city(&self, city: &str) -> Result<WeatherReading> {
        Ok(mock_reading(city))
    }

    fn is_mock(&self) -> bool {
        true
    }
}
