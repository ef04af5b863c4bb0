//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the OpenWeatherMap and geolocation adapters, configuration
//! loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ConfigError, GeoLocationConfig, LocationConfig, WeatherAppConfig};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
