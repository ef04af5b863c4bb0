//! Geolocation port

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

/// Port for the device's own position
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    /// Current position, or `None` when the provider has no fix or is
    /// unavailable
    async fn current_position(&self) -> Option<GeoLocation>;
}
