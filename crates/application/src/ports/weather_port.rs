//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::{
    entities::{ForecastEntry, WeatherSnapshot},
    value_objects::GeoLocation,
};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather for a location
    async fn current_weather(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherSnapshot, ApplicationError>;

    /// Get the raw forecast time slots for a location, in service order
    async fn forecast(&self, location: &GeoLocation)
    -> Result<Vec<ForecastEntry>, ApplicationError>;
}
