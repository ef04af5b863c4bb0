//! Weather adapter - Implements GeocoderPort and WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::{GeocoderPort, WeatherPort};
use async_trait::async_trait;
use domain::entities::{ForecastEntry, GeocodeCandidate, WeatherSnapshot};
use domain::value_objects::{GeoLocation, LocationQuery};
use integration_weather::{
    CurrentWeather, ForecastSlot, GeocodeResult, OpenWeatherMapClient, WeatherClient,
    WeatherConfig, WeatherError,
};
use tracing::{debug, instrument, warn};

/// Adapter for geocoding and weather using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    ///
    /// Every client failure is a transport failure to the application; the
    /// message keeps the specific cause for logs.
    fn map_error(err: WeatherError) -> ApplicationError {
        ApplicationError::TransportFailure(err.to_string())
    }

    fn map_candidate(result: GeocodeResult) -> Result<GeocodeCandidate, ApplicationError> {
        let location = GeoLocation::new(result.lat, result.lon).map_err(|e| {
            ApplicationError::transport(format!("Geocoder returned {}: {e}", result.name))
        })?;
        Ok(GeocodeCandidate {
            name: result.name,
            state: result.state,
            country: result.country,
            location,
        })
    }

    fn map_current(current: CurrentWeather) -> Result<WeatherSnapshot, ApplicationError> {
        let location = GeoLocation::new(current.coord.lat, current.coord.lon)
            .map_err(|e| ApplicationError::transport(format!("Weather service returned {e}")))?;
        Ok(WeatherSnapshot {
            country: current.country().to_string(),
            precipitation_mm: current.rain_last_hour(),
            condition: current.condition().to_string(),
            place_name: current.name,
            location,
            observed_at: current.dt,
            temperature: current.main.temp,
            feels_like: current.main.feels_like,
            humidity: current.main.humidity,
            wind_speed: current.wind.speed,
        })
    }

    fn map_slot(slot: &ForecastSlot) -> ForecastEntry {
        ForecastEntry::new(slot.dt, slot.main.temp, slot.wind.speed, slot.condition())
    }
}

#[async_trait]
impl GeocoderPort for WeatherAdapter {
    #[instrument(skip(self, query), fields(query = %query))]
    async fn geocode(
        &self,
        query: &LocationQuery,
        limit: u8,
    ) -> Result<Vec<GeocodeCandidate>, ApplicationError> {
        let results = self
            .client
            .geocode(query.as_str(), limit)
            .await
            .map_err(Self::map_error)?;

        debug!(count = results.len(), "Retrieved geocode candidates");
        let candidates = results
            .into_iter()
            .filter_map(|result| match Self::map_candidate(result) {
                Ok(candidate) => Some(candidate),
                Err(e) => {
                    warn!(error = %e, "Skipping geocode candidate");
                    None
                },
            })
            .collect();
        Ok(candidates)
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn current_weather(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        let result = self
            .client
            .get_current(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.main.temp,
                    condition = current.condition(),
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result.and_then(Self::map_current)
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<ForecastEntry>, ApplicationError> {
        let result = self
            .client
            .get_forecast(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(slots = forecast.list.len(), "Retrieved weather forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
            },
        }

        result.map(|f| f.list.iter().map(Self::map_slot).collect())
    }
}
