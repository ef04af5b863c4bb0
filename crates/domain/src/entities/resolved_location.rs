//! Resolved location entity

use serde::{Deserialize, Serialize};

use crate::entities::{GeocodeCandidate, WeatherSnapshot};
use crate::value_objects::GeoLocation;

/// The place weather is fetched and shown for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Coordinates used for the weather calls
    pub location: GeoLocation,
    /// Human readable label, e.g. `Ikeja, Lagos, NG`
    pub display_label: String,
}

impl ResolvedLocation {
    /// Create a resolved location
    #[must_use]
    pub fn new(location: GeoLocation, display_label: impl Into<String>) -> Self {
        Self {
            location,
            display_label: display_label.into(),
        }
    }

    /// Label a position with the place name the weather service reported
    #[must_use]
    pub fn from_snapshot(snapshot: &WeatherSnapshot) -> Self {
        Self::new(
            snapshot.location,
            format!("{}, {}", snapshot.place_name, snapshot.country),
        )
    }
}

impl From<&GeocodeCandidate> for ResolvedLocation {
    fn from(candidate: &GeocodeCandidate) -> Self {
        let label = match &candidate.state {
            Some(state) => format!("{}, {state}, {}", candidate.name, candidate.country),
            None => format!("{}, {}", candidate.name, candidate.country),
        };
        Self::new(candidate.location, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_includes_state_when_present() {
        let candidate =
            GeocodeCandidate::new("Ikeja", "NG", GeoLocation::ikeja()).with_state("Lagos");
        let resolved = ResolvedLocation::from(&candidate);
        assert_eq!(resolved.display_label, "Ikeja, Lagos, NG");
        assert_eq!(resolved.location, GeoLocation::ikeja());
    }

    #[test]
    fn label_without_state() {
        let candidate = GeocodeCandidate::new("Paris", "FR", GeoLocation::new_unchecked(48.85, 2.35));
        assert_eq!(ResolvedLocation::from(&candidate).display_label, "Paris, FR");
    }

    #[test]
    fn label_from_snapshot() {
        let snapshot = WeatherSnapshot::new("Lagos", "NG", GeoLocation::lagos(), 0, 300.0, "Clear");
        let resolved = ResolvedLocation::from_snapshot(&snapshot);
        assert_eq!(resolved.display_label, "Lagos, NG");
        assert_eq!(resolved.location, GeoLocation::lagos());
    }
}
