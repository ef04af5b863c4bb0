//! Application services - Use case implementations

mod location_resolver;
mod weather_widget;

pub use location_resolver::LocationResolver;
pub use weather_widget::{DEFAULT_GEOCODE_LIMIT, WeatherReport, WeatherWidget};
