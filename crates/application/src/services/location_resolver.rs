//! Location resolver
//!
//! Picks one geocoder candidate for a query and reduces a raw forecast to
//! one entry per calendar day.

use std::collections::HashSet;

use domain::{
    entities::{DailyForecast, ForecastEntry, GeocodeCandidate, ResolvedLocation},
    value_objects::{CountryCode, Timezone},
};
use tracing::debug;

/// Candidate selection and forecast day-bucketing
#[derive(Debug, Clone, Default)]
pub struct LocationResolver {
    preferred_country: CountryCode,
    timezone: Timezone,
}

impl LocationResolver {
    /// Create a resolver preferring `preferred_country` and bucketing days
    /// in `timezone`
    #[must_use]
    pub const fn new(preferred_country: CountryCode, timezone: Timezone) -> Self {
        Self {
            preferred_country,
            timezone,
        }
    }

    /// Pick the candidate to show weather for
    ///
    /// The first candidate whose name equals `primary_token` (ignoring case)
    /// and which lies in the preferred country wins. Otherwise the first
    /// candidate is used. Returns `None` only for an empty slice.
    #[must_use]
    pub fn select_match(
        &self,
        candidates: &[GeocodeCandidate],
        primary_token: &str,
    ) -> Option<ResolvedLocation> {
        let preferred = self.preferred_country.as_str();
        candidates
            .iter()
            .find(|c| c.name_matches(primary_token) && c.is_in_country(preferred))
            .or_else(|| candidates.first())
            .map(ResolvedLocation::from)
    }

    /// Keep the first entry seen for each calendar day, at most
    /// [`DailyForecast::MAX_DAYS`] days, in first-seen order
    #[must_use]
    pub fn dedupe_by_day(&self, entries: &[ForecastEntry]) -> DailyForecast {
        let mut seen = HashSet::new();
        let mut days = Vec::with_capacity(DailyForecast::MAX_DAYS);

        for entry in entries {
            let Some(date) = self.timezone.local_date(entry.timestamp) else {
                debug!(timestamp = entry.timestamp, "Skipping forecast entry outside date range");
                continue;
            };
            if seen.insert(date) {
                days.push(entry.clone());
                if days.len() == DailyForecast::MAX_DAYS {
                    break;
                }
            }
        }

        DailyForecast::new(days)
    }
}
