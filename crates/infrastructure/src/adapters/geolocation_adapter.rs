//! Geolocation adapter - Implements GeolocationPort from configuration

use application::ports::GeolocationPort;
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use tracing::debug;

use crate::config::LocationConfig;

/// Reports a fixed position, typically `location.default_location`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredGeolocation {
    position: Option<GeoLocation>,
}

impl ConfiguredGeolocation {
    /// Provider that reports `position`, or nothing when `None`
    #[must_use]
    pub const fn new(position: Option<GeoLocation>) -> Self {
        Self { position }
    }

    /// Provider for the configured default location
    ///
    /// An out-of-range configured pair behaves like no position at all.
    #[must_use]
    pub fn from_config(config: &LocationConfig) -> Self {
        Self::new(
            config
                .default_location
                .and_then(|p| p.to_geo_location().ok()),
        )
    }
}

#[async_trait]
impl GeolocationPort for ConfiguredGeolocation {
    async fn current_position(&self) -> Option<GeoLocation> {
        debug!(available = self.position.is_some(), "Reporting configured position");
        self.position
    }
}
