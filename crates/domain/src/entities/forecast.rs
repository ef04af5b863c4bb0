//! Forecast entities

use serde::{Deserialize, Serialize};

use crate::entities::kelvin_to_celsius;
use crate::value_objects::WeatherIcon;

/// One time slot of a multi-day forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Slot time (unix seconds)
    pub timestamp: i64,
    /// Temperature in Kelvin
    pub temperature: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Condition group name, e.g. `Rain`
    pub condition: String,
}

impl ForecastEntry {
    #[must_use]
    pub fn new(
        timestamp: i64,
        temperature: f64,
        wind_speed: f64,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            temperature,
            wind_speed,
            condition: condition.into(),
        }
    }

    /// Temperature in whole degrees Celsius
    #[must_use]
    pub fn temperature_celsius(&self) -> i32 {
        kelvin_to_celsius(self.temperature)
    }

    #[must_use]
    pub fn icon(&self) -> WeatherIcon {
        WeatherIcon::for_condition(&self.condition)
    }
}

/// At most [`DailyForecast::MAX_DAYS`] entries, one per calendar day, in
/// the order their days were first seen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyForecast(Vec<ForecastEntry>);

impl DailyForecast {
    /// Maximum number of days shown
    pub const MAX_DAYS: usize = 5;

    /// Wrap per-day entries, dropping anything past [`Self::MAX_DAYS`]
    #[must_use]
    pub fn new(mut days: Vec<ForecastEntry>) -> Self {
        days.truncate(Self::MAX_DAYS);
        Self(days)
    }

    #[must_use]
    pub fn days(&self) -> &[ForecastEntry] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ForecastEntry> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a DailyForecast {
    type Item = &'a ForecastEntry;
    type IntoIter = std::slice::Iter<'a, ForecastEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
