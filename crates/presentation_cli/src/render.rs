//! Terminal renderer
//!
//! Keeps a screen buffer that the widget draws into; `main` prints the
//! finished frame once the lookup returns.

use application::RenderPort;
use domain::{
    entities::{DailyForecast, ResolvedLocation, WeatherSnapshot},
    value_objects::{Timezone, UiState},
};
use parking_lot::Mutex;

/// Long date of the observation, e.g. "Monday, Jan 15"
const LONG_DATE: &str = "%A, %b %-d";

/// Weekday label of a daily entry, e.g. "Mon"
const SHORT_WEEKDAY: &str = "%a";

#[derive(Debug, Default)]
struct Screen {
    state: UiState,
    current: Vec<String>,
    daily: Vec<String>,
    message: Option<String>,
}

/// Renders weather into a text frame
#[derive(Debug)]
pub struct TerminalRenderer {
    timezone: Timezone,
    screen: Mutex<Screen>,
}

impl TerminalRenderer {
    /// Renderer formatting dates in `timezone`
    #[must_use]
    pub fn new(timezone: Timezone) -> Self {
        Self {
            timezone,
            screen: Mutex::new(Screen::default()),
        }
    }

    /// Status last rendered
    #[must_use]
    pub fn state(&self) -> UiState {
        self.screen.lock().state
    }

    /// Message currently shown, if any
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.screen.lock().message.clone()
    }

    /// The frame as it would appear on screen
    #[must_use]
    pub fn frame(&self) -> String {
        let screen = self.screen.lock();
        let mut lines: Vec<&str> = screen.current.iter().map(String::as_str).collect();

        if !screen.daily.is_empty() {
            if !lines.is_empty() {
                lines.push("");
            }
            lines.extend(screen.daily.iter().map(String::as_str));
        }

        if let Some(message) = &screen.message {
            lines.push(message.as_str());
        }

        lines.join("\n")
    }

    fn format_date(&self, timestamp: i64, pattern: &str) -> String {
        self.timezone
            .datetime(timestamp)
            .map_or_else(|| "-".to_string(), |dt| dt.format(pattern).to_string())
    }
}

impl RenderPort for TerminalRenderer {
    fn render_state(&self, state: UiState) {
        self.screen.lock().state = state;
    }

    fn render_current(&self, location: &ResolvedLocation, snapshot: &WeatherSnapshot) {
        let icon = snapshot.icon();
        let lines = vec![
            location.display_label.clone(),
            self.format_date(snapshot.observed_at, LONG_DATE),
            format!(
                "{} {}°C  {} ({}, {})",
                icon.glyph(),
                snapshot.temperature_celsius(),
                snapshot.condition,
                snapshot.theme(),
                icon
            ),
            format!("Feels like {}°C", snapshot.feels_like_celsius()),
            format!("Humidity {}%", snapshot.humidity),
            format!("Wind {} m/s", snapshot.wind_speed),
            format!("Precipitation {} mm", snapshot.precipitation_mm),
        ];
        self.screen.lock().current = lines;
    }

    fn render_daily(&self, daily: &DailyForecast) {
        let lines = daily
            .iter()
            .map(|day| {
                format!(
                    "{:<4}{} {:>4}°C  {} m/s",
                    self.format_date(day.timestamp, SHORT_WEEKDAY),
                    day.icon().glyph(),
                    day.temperature_celsius(),
                    day.wind_speed
                )
            })
            .collect();
        self.screen.lock().daily = lines;
    }

    fn clear(&self) {
        let mut screen = self.screen.lock();
        screen.current.clear();
        screen.daily.clear();
    }

    fn show_message(&self, message: &str) {
        self.screen.lock().message = Some(message.to_string());
    }

    fn clear_message(&self) {
        self.screen.lock().message = None;
    }
}
