//! Current weather entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, WeatherIcon, WeatherTheme};

const KELVIN_OFFSET: f64 = 273.15;

/// Convert Kelvin to whole degrees Celsius, rounding half away from zero
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn kelvin_to_celsius(kelvin: f64) -> i32 {
    (kelvin - KELVIN_OFFSET).round() as i32
}

/// Current conditions at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Place name reported by the weather service
    pub place_name: String,
    /// Two-letter country code reported by the weather service
    pub country: String,
    /// Observation position
    pub location: GeoLocation,
    /// Observation time (unix seconds)
    pub observed_at: i64,
    /// Temperature in Kelvin
    pub temperature: f64,
    /// Perceived temperature in Kelvin
    pub feels_like: f64,
    /// Relative humidity (0-100)
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Rain volume over the last hour in mm, 0 when not reported
    pub precipitation_mm: f64,
    /// Condition group name, e.g. `Clouds`
    pub condition: String,
}

impl WeatherSnapshot {
    /// Create a snapshot with the remaining readings zeroed
    #[must_use]
    pub fn new(
        place_name: impl Into<String>,
        country: impl Into<String>,
        location: GeoLocation,
        observed_at: i64,
        temperature: f64,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            place_name: place_name.into(),
            country: country.into(),
            location,
            observed_at,
            temperature,
            feels_like: temperature,
            humidity: 0,
            wind_speed: 0.0,
            precipitation_mm: 0.0,
            condition: condition.into(),
        }
    }

    /// Temperature in whole degrees Celsius
    #[must_use]
    pub fn temperature_celsius(&self) -> i32 {
        kelvin_to_celsius(self.temperature)
    }

    /// Feels-like temperature in whole degrees Celsius
    #[must_use]
    pub fn feels_like_celsius(&self) -> i32 {
        kelvin_to_celsius(self.feels_like)
    }

    #[must_use]
    pub fn theme(&self) -> WeatherTheme {
        WeatherTheme::for_condition(&self.condition)
    }

    #[must_use]
    pub fn icon(&self) -> WeatherIcon {
        WeatherIcon::for_condition(&self.condition)
    }
}
