//! Render port
//!
//! Everything the widget shows goes through this interface.

use domain::{
    entities::{DailyForecast, ResolvedLocation, WeatherSnapshot},
    value_objects::UiState,
};
#[cfg(test)]
use mockall::automock;

/// Port for the display surface
#[cfg_attr(test, automock)]
pub trait RenderPort: Send + Sync {
    /// Show the current status
    fn render_state(&self, state: UiState);

    /// Show current conditions for a location
    fn render_current(&self, location: &ResolvedLocation, snapshot: &WeatherSnapshot);

    /// Show the per-day forecast strip
    fn render_daily(&self, daily: &DailyForecast);

    /// Remove previously rendered weather content
    fn clear(&self);

    /// Show a user-facing message
    fn show_message(&self, message: &str);

    /// Remove the user-facing message
    fn clear_message(&self);
}
