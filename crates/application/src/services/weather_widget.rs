//! Weather widget
//!
//! Runs a lookup from user input (or the device position) through to the
//! renderer and owns the UI status flag while doing so.

use std::{fmt, sync::Arc};

use domain::{
    entities::{DailyForecast, ResolvedLocation, WeatherSnapshot},
    value_objects::{GeoLocation, LocationQuery, UiEvent, UiState},
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeocoderPort, GeolocationPort, RenderPort, WeatherPort},
    services::LocationResolver,
};

/// Candidates requested from the geocoder when not configured otherwise
pub const DEFAULT_GEOCODE_LIMIT: u8 = 5;

/// Everything rendered for one successful lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub location: ResolvedLocation,
    pub current: WeatherSnapshot,
    pub daily: DailyForecast,
}

/// Orchestrates geocoding, weather retrieval and rendering
pub struct WeatherWidget {
    geocoder: Arc<dyn GeocoderPort>,
    weather: Arc<dyn WeatherPort>,
    renderer: Arc<dyn RenderPort>,
    resolver: LocationResolver,
    geocode_limit: u8,
    state: UiState,
}

impl fmt::Debug for WeatherWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherWidget")
            .field("resolver", &self.resolver)
            .field("geocode_limit", &self.geocode_limit)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl WeatherWidget {
    /// Create a widget in the `idle` state
    pub fn new(
        geocoder: Arc<dyn GeocoderPort>,
        weather: Arc<dyn WeatherPort>,
        renderer: Arc<dyn RenderPort>,
    ) -> Self {
        Self {
            geocoder,
            weather,
            renderer,
            resolver: LocationResolver::default(),
            geocode_limit: DEFAULT_GEOCODE_LIMIT,
            state: UiState::default(),
        }
    }

    /// Use a resolver with a different preferred country or timezone
    #[must_use]
    pub fn with_resolver(mut self, resolver: LocationResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Set how many candidates to request from the geocoder
    #[must_use]
    pub const fn with_geocode_limit(mut self, limit: u8) -> Self {
        self.geocode_limit = limit;
        self
    }

    /// Current UI status
    pub const fn state(&self) -> UiState {
        self.state
    }

    /// Look up and render weather for a free-text city
    ///
    /// Blank input does nothing and returns `Ok(None)`. Any failure leaves
    /// the widget `idle` with the rendered content cleared and the user
    /// message shown; the error is returned with its kind intact.
    #[instrument(skip(self))]
    pub async fn search(&mut self, raw: &str) -> Result<Option<WeatherReport>, ApplicationError> {
        if raw.trim().is_empty() {
            debug!("Ignoring blank search");
            return Ok(None);
        }

        self.begin();
        let result = self.run_search(raw).await;
        self.finish(result).map(Some)
    }

    /// Look up and render weather for the device position
    ///
    /// Returns `Ok(None)` without touching the display when the provider
    /// has no position.
    #[instrument(skip(self, geolocation))]
    pub async fn locate(
        &mut self,
        geolocation: &dyn GeolocationPort,
    ) -> Result<Option<WeatherReport>, ApplicationError> {
        let Some(position) = geolocation.current_position().await else {
            info!("No position available, skipping lookup");
            return Ok(None);
        };

        self.begin();
        let result = self.run_locate(position).await;
        self.finish(result).map(Some)
    }

    async fn run_search(&self, raw: &str) -> Result<WeatherReport, ApplicationError> {
        let query = LocationQuery::normalize(raw)?;
        let candidates = self.geocoder.geocode(&query, self.geocode_limit).await?;
        debug!(query = %query, count = candidates.len(), "Geocoder returned candidates");

        let location = self
            .resolver
            .select_match(&candidates, query.primary_token())
            .ok_or_else(|| ApplicationError::NoMatch(query.to_string()))?;
        info!(label = %location.display_label, "Resolved location");

        let current = self.weather.current_weather(&location.location).await?;
        self.renderer.render_current(&location, &current);

        let daily = self.load_daily(&location.location).await?;
        Ok(WeatherReport {
            location,
            current,
            daily,
        })
    }

    async fn run_locate(&self, position: GeoLocation) -> Result<WeatherReport, ApplicationError> {
        let current = self.weather.current_weather(&position).await?;
        let location = ResolvedLocation::from_snapshot(&current);
        info!(label = %location.display_label, "Resolved device position");
        self.renderer.render_current(&location, &current);

        let daily = self.load_daily(&position).await?;
        Ok(WeatherReport {
            location,
            current,
            daily,
        })
    }

    async fn load_daily(&self, location: &GeoLocation) -> Result<DailyForecast, ApplicationError> {
        let entries = self.weather.forecast(location).await?;
        let daily = self.resolver.dedupe_by_day(&entries);
        debug!(entries = entries.len(), days = daily.len(), "Deduplicated forecast");
        self.renderer.render_daily(&daily);
        Ok(daily)
    }

    fn begin(&mut self) {
        self.renderer.clear_message();
        self.renderer.clear();
        self.transition(UiEvent::Submit);
    }

    fn finish(
        &mut self,
        result: Result<WeatherReport, ApplicationError>,
    ) -> Result<WeatherReport, ApplicationError> {
        match result {
            Ok(report) => {
                self.transition(UiEvent::Succeeded);
                Ok(report)
            },
            Err(err) => {
                warn!(kind = ?err.kind(), error = %err, "Weather lookup failed");
                self.transition(UiEvent::Failed);
                self.renderer.clear();
                self.renderer.show_message(err.user_message());
                Err(err)
            },
        }
    }

    fn transition(&mut self, event: UiEvent) {
        match self.state.next(event) {
            Ok(next) => {
                self.state = next;
                self.renderer.render_state(next);
            },
            Err(err) => warn!(error = %err, "Ignoring UI event"),
        }
    }
}
