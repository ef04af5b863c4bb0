//! Domain entities - Places, observations and forecasts

mod forecast;
mod geocode_candidate;
mod resolved_location;
mod weather_snapshot;

pub use forecast::{DailyForecast, ForecastEntry};
pub use geocode_candidate::GeocodeCandidate;
pub use resolved_location::ResolvedLocation;
pub use weather_snapshot::{WeatherSnapshot, kelvin_to_celsius};
