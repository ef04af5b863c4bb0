//! Geocoder candidate entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, fold_case};

/// One place returned by the geocoder for a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    /// Place name as reported by the geocoder
    pub name: String,
    /// Region/state, when the geocoder knows it
    pub state: Option<String>,
    /// Two-letter country code
    pub country: String,
    /// Position of the place
    pub location: GeoLocation,
}

impl GeocodeCandidate {
    /// Create a new candidate without a state
    #[must_use]
    pub fn new(name: impl Into<String>, country: impl Into<String>, location: GeoLocation) -> Self {
        Self {
            name: name.into(),
            state: None,
            country: country.into(),
            location,
        }
    }

    /// Set the state/region
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Whether the name equals `token` once both are case-folded the way
    /// queries are normalized
    #[must_use]
    pub fn name_matches(&self, token: &str) -> bool {
        fold_case(&self.name) == fold_case(token)
    }

    /// Whether the country equals `code`, ignoring case
    #[must_use]
    pub fn is_in_country(&self, code: &str) -> bool {
        self.country.eq_ignore_ascii_case(code)
    }
}
