//! Application configuration
//!
//! Split into focused sub-modules:
//! - `weather`: OpenWeatherMap endpoint, key and limits
//! - `location`: preferred country, day-bucketing timezone, device position
//!
//! Logging settings live with the subscriber setup in `telemetry`.
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. `skycast.toml` in the working directory (optional), or an explicit file
//! 3. environment variables prefixed with `SKYCAST_`, sections separated by
//!    `__` (e.g. `SKYCAST_WEATHER__API_KEY`)

mod location;
mod weather;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::telemetry::LoggingConfig;

pub use location::{GeoLocationConfig, LocationConfig};
pub use weather::WeatherAppConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SKYCAST";

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "skycast";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather service configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Location resolution configuration
    #[serde(default)]
    pub location: LocationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// With `path` set, that file must exist. Without it, `skycast.toml` in
    /// the working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                config::File::from(path).required(true)
            },
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("weather.base_url", weather::default_weather_base_url())?
            .set_default("location.preferred_country", "NG")?
            .set_default("location.timezone", "UTC")?
            // Load from file
            .add_source(file)
            // Override with environment variables (e.g., SKYCAST_WEATHER__API_KEY)
            .add_source(environment);

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Check values that deserialization alone does not enforce
    ///
    /// Country code and timezone are already parsed into validated types
    /// while loading.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.weather.has_api_key() {
            return Err(ConfigError::Invalid(format!(
                "weather.api_key is required (set {ENV_PREFIX}_WEATHER__API_KEY)"
            )));
        }

        let limit = self.weather.geocode_limit;
        if !(1..=integration_weather::MAX_GEOCODE_LIMIT).contains(&limit) {
            return Err(ConfigError::Invalid(format!(
                "weather.geocode_limit must be between 1 and {}, got {limit}",
                integration_weather::MAX_GEOCODE_LIMIT
            )));
        }

        if self.weather.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "weather.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if let Some(position) = &self.location.default_location {
            position.to_geo_location().map_err(|e| {
                ConfigError::Invalid(format!("location.default_location: {e}"))
            })?;
        }

        Ok(())
    }
}
