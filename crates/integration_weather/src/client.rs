//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap geocoding and weather APIs.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentWeather, Forecast, GeocodeResult};

/// Largest `limit` the direct geocoding endpoint accepts
pub const MAX_GEOCODE_LIMIT: u8 = 5;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// API key missing or rejected
    #[error("Unauthorized: check the API key")]
    Unauthorized,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap base URL (default: <https://api.openweathermap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `appid`
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Resolve a place query to up to `limit` candidates
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<GeocodeResult>, WeatherError>;

    /// Get current weather for a location
    async fn get_current(&self, latitude: f64, longitude: f64)
    -> Result<CurrentWeather, WeatherError>;

    /// Get the 5 day / 3 hour forecast for a location
    async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Map a non-success status to an error
    fn check_status(status: StatusCode) -> Result<(), WeatherError> {
        if status == StatusCode::UNAUTHORIZED {
            return Err(WeatherError::Unauthorized);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(())
    }

    fn map_send_error(err: &reqwest::Error) -> WeatherError {
        if err.is_timeout() {
            WeatherError::Timeout
        } else if err.is_connect() {
            WeatherError::ConnectionFailed(err.to_string())
        } else {
            WeatherError::RequestFailed(err.to_string())
        }
    }

    /// GET `path` with `params` plus the API key and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        debug!(url = %url, ?params, "Requesting OpenWeatherMap");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        Self::check_status(response.status())?;

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    fn coordinate_params(latitude: f64, longitude: f64) -> [(&'static str, String); 2] {
        [("lat", latitude.to_string()), ("lon", longitude.to_string())]
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<GeocodeResult>, WeatherError> {
        let limit = limit.clamp(1, MAX_GEOCODE_LIMIT);
        let params = [("q", query.to_string()), ("limit", limit.to_string())];

        let results: Vec<GeocodeResult> = self.get_json("/geo/1.0/direct", &params).await?;
        debug!(count = results.len(), "Geocoded query");
        Ok(results)
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;
        let params = Self::coordinate_params(latitude, longitude);
        self.get_json("/data/2.5/weather", &params).await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;
        let params = Self::coordinate_params(latitude, longitude);
        let forecast: Forecast = self.get_json("/data/2.5/forecast", &params).await?;
        debug!(slots = forecast.list.len(), "Fetched forecast");
        Ok(forecast)
    }
}
