//! Weather data models
//!
//! Wire types for the OpenWeatherMap geocoding, current weather and 5 day /
//! 3 hour forecast endpoints. Temperatures are Kelvin (the API's default
//! "standard" units) and wind speeds are m/s.

use serde::{Deserialize, Serialize};

/// One result of the direct geocoding endpoint (`/geo/1.0/direct`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// Place name
    pub name: String,
    /// Region/state, absent for many places
    #[serde(default)]
    pub state: Option<String>,
    /// ISO 3166 country code
    pub country: String,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
}

/// Coordinates as echoed back by the weather endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Condition group (`weather[]` entries)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionGroup {
    /// OpenWeatherMap condition id (e.g. 800 for clear sky)
    pub id: u16,
    /// Group name, e.g. `Clear`, `Clouds`, `Rain`
    pub main: String,
    /// Longer description, e.g. `light rain`
    #[serde(default)]
    pub description: String,
}

/// Temperature block (`main`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    /// Temperature in Kelvin
    pub temp: f64,
    /// Perceived temperature in Kelvin
    #[serde(default)]
    pub feels_like: f64,
    /// Relative humidity in percent
    #[serde(default)]
    pub humidity: u8,
}

/// Wind block
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Speed in m/s
    #[serde(default)]
    pub speed: f64,
}

/// Precipitation volumes (`rain` / `snow`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Precipitation {
    /// Volume over the last hour in mm
    #[serde(rename = "1h", default)]
    pub one_hour: Option<f64>,
    /// Volume over the last three hours in mm
    #[serde(rename = "3h", default)]
    pub three_hours: Option<f64>,
}

/// System block of the current weather response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// ISO 3166 country code, absent over open water
    #[serde(default)]
    pub country: Option<String>,
}

/// Response of `/data/2.5/weather`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub coord: Coordinates,
    #[serde(default)]
    pub weather: Vec<ConditionGroup>,
    pub main: MainReadings,
    #[serde(default)]
    pub wind: Wind,
    #[serde(default)]
    pub rain: Option<Precipitation>,
    /// Observation time (unix seconds, UTC)
    pub dt: i64,
    /// Place name, may be empty
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sys: SystemInfo,
}

impl CurrentWeather {
    /// Group name of the primary condition, empty when none was reported
    #[must_use]
    pub fn condition(&self) -> &str {
        primary_condition(&self.weather)
    }

    /// Rain over the last hour in mm, `0.0` when not reported
    #[must_use]
    pub fn rain_last_hour(&self) -> f64 {
        self.rain.and_then(|r| r.one_hour).unwrap_or(0.0)
    }

    /// Country code, empty when not reported
    #[must_use]
    pub fn country(&self) -> &str {
        self.sys.country.as_deref().unwrap_or_default()
    }
}

/// One three-hour slot of the forecast list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSlot {
    /// Slot time (unix seconds, UTC)
    pub dt: i64,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<ConditionGroup>,
    #[serde(default)]
    pub wind: Wind,
}

impl ForecastSlot {
    /// Group name of the primary condition, empty when none was reported
    #[must_use]
    pub fn condition(&self) -> &str {
        primary_condition(&self.weather)
    }
}

/// City block of the forecast response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastCity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    /// Shift in seconds from UTC
    #[serde(default)]
    pub timezone: i32,
}

/// Response of `/data/2.5/forecast`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Slots in chronological order
    pub list: Vec<ForecastSlot>,
    #[serde(default)]
    pub city: ForecastCity,
}

fn primary_condition(groups: &[ConditionGroup]) -> &str {
    groups.first().map_or("", |g| g.main.as_str())
}
