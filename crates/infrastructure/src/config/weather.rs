//! OpenWeatherMap configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key (sensitive - uses `SecretString`)
    ///
    /// Usually supplied as `SKYCAST_WEATHER__API_KEY`.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,

    /// Candidates requested from the geocoder (1-5)
    #[serde(default = "default_geocode_limit")]
    pub geocode_limit: u8,
}

pub(super) fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

const fn default_weather_timeout() -> u64 {
    10
}

const fn default_geocode_limit() -> u8 {
    application::DEFAULT_GEOCODE_LIMIT
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
            timeout_secs: default_weather_timeout(),
            geocode_limit: default_geocode_limit(),
        }
    }
}

impl WeatherAppConfig {
    /// Whether a non-blank API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// Convert to the client configuration of `integration_weather`
    #[must_use]
    pub fn to_client_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().trim().to_string())
                .unwrap_or_default(),
            timeout_secs: self.timeout_secs,
        }
    }
}
