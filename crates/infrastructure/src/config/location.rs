//! Location resolution configuration

use domain::{CountryCode, DomainError, GeoLocation, Timezone};
use serde::{Deserialize, Serialize};

/// Settings for candidate selection, day bucketing and geolocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Country preferred when several candidates share a name
    #[serde(default)]
    pub preferred_country: CountryCode,

    /// IANA timezone forecast entries are grouped into days in
    #[serde(default)]
    pub timezone: Timezone,

    /// Position reported by the geolocation provider
    ///
    /// Configured as inline table: `{ latitude = 6.6018, longitude = 3.3515 }`
    #[serde(default)]
    pub default_location: Option<GeoLocationConfig>,
}

/// Geographic location configuration (latitude/longitude pair)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to domain `GeoLocation` value object
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if the pair is out of range.
    pub fn to_geo_location(&self) -> Result<GeoLocation, DomainError> {
        GeoLocation::new(self.latitude, self.longitude)
    }
}
