//! Weather domain module.
//!
//! A search produces one transient `WeatherReading`, either synthesized
//! deterministically (mock mode, no API credential configured) or fetched
//! from the live provider behind the `WeatherProvider` trait.
//!
//! # Module Structure
//!
//! - `model`: The reading and the fixed condition set
//! - `mock`: Deterministic mock generator
//! - `provider`: Async lookup trait and the mock implementation

mod mock;
mod model;
mod provider;

// Re-export public API
pub use mock::mock_reading;
pub use model::{CONDITIONS, Condition, WeatherReading, icon_url};
pub use provider::{MockWeatherProvider, WeatherProvider};
