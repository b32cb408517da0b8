//! Infrastructure layer for Cirrus.
//!
//! File-backed state storage, configuration loading, and the live
//! OpenWeatherMap client. Everything here implements traits from
//! `cirrus-core`; the domain layer never touches the filesystem or the
//! network directly.

pub mod config_service;
pub mod json_state_store;
pub mod openweather;
pub mod paths;

pub use config_service::load_config;
pub use json_state_store::JsonFileStore;
pub use openweather::OpenWeatherClient;
pub use paths::CirrusPaths;
