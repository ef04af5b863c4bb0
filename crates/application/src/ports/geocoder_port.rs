//! Geocoder port
//!
//! Defines the interface for turning a place query into candidate locations.

use async_trait::async_trait;
use domain::{entities::GeocodeCandidate, value_objects::LocationQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forward geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocoderPort: Send + Sync {
    /// Look up places matching a normalized query
    ///
    /// Returns at most `limit` candidates in the geocoder's ranking order.
    /// An empty list is not an error.
    async fn geocode(
        &self,
        query: &LocationQuery,
        limit: u8,
    ) -> Result<Vec<GeocodeCandidate>, ApplicationError>;
}
