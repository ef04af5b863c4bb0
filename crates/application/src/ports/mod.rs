//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoder_port;
mod geolocation_port;
mod render_port;
mod weather_port;

pub use geocoder_port::GeocoderPort;
#[cfg(test)]
pub use geocoder_port::MockGeocoderPort;
pub use geolocation_port::GeolocationPort;
#[cfg(test)]
pub use geolocation_port::MockGeolocationPort;
#[cfg(test)]
pub use render_port::MockRenderPort;
pub use render_port::RenderPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
