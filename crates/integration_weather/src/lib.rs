//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap APIs (<https://openweathermap.org/api>):
//! direct geocoding, current weather and the 5 day / 3 hour forecast.
//! Requires an API key.

pub mod client;
mod models;

pub use client::{
    MAX_GEOCODE_LIMIT, OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError,
};
pub use models::{
    ConditionGroup, Coordinates, CurrentWeather, Forecast, ForecastCity, ForecastSlot,
    GeocodeResult, MainReadings, Precipitation, SystemInfo, Wind,
};
