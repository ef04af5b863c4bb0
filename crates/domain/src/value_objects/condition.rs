//! Weather condition lookups
//!
//! OpenWeatherMap reports a condition group name (`weather[0].main`) such as
//! `Clear` or `Drizzle`. Both the display theme and the icon are derived from
//! it through one static table each, with an explicit fallback.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display theme for the current conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherTheme {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    Foggy,
}

const THEMES: &[(&str, WeatherTheme)] = &[
    ("Clear", WeatherTheme::Sunny),
    ("Clouds", WeatherTheme::Cloudy),
    ("Rain", WeatherTheme::Rainy),
    ("Drizzle", WeatherTheme::Rainy),
    ("Thunderstorm", WeatherTheme::Stormy),
    ("Snow", WeatherTheme::Snowy),
];

impl WeatherTheme {
    /// Theme for conditions not in the table
    pub const FALLBACK: Self = Self::Foggy;

    /// Look up the theme for a condition group name
    #[must_use]
    pub fn for_condition(condition: &str) -> Self {
        lookup(THEMES, condition).unwrap_or(Self::FALLBACK)
    }

    /// Lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Stormy => "stormy",
            Self::Snowy => "snowy",
            Self::Foggy => "foggy",
        }
    }
}

impl fmt::Display for WeatherTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Icon shown next to a temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Snow,
    Fog,
}

const ICONS: &[(&str, WeatherIcon)] = &[
    ("Clear", WeatherIcon::Clear),
    ("Clouds", WeatherIcon::Clouds),
    ("Rain", WeatherIcon::Rain),
    ("Drizzle", WeatherIcon::Rain),
    ("Thunderstorm", WeatherIcon::Thunderstorm),
    ("Snow", WeatherIcon::Snow),
    ("Mist", WeatherIcon::Fog),
    ("Fog", WeatherIcon::Fog),
    ("Haze", WeatherIcon::Fog),
    ("Smoke", WeatherIcon::Fog),
    ("Dust", WeatherIcon::Fog),
    ("Sand", WeatherIcon::Fog),
    ("Ash", WeatherIcon::Fog),
];

impl WeatherIcon {
    /// Icon for conditions not in the table
    pub const FALLBACK: Self = Self::Clouds;

    /// Look up the icon for a condition group name
    #[must_use]
    pub fn for_condition(condition: &str) -> Self {
        lookup(ICONS, condition).unwrap_or(Self::FALLBACK)
    }

    /// Lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Clouds => "clouds",
            Self::Rain => "rain",
            Self::Thunderstorm => "thunderstorm",
            Self::Snow => "snow",
            Self::Fog => "fog",
        }
    }

    /// Terminal glyph
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "☀",
            Self::Clouds => "☁",
            Self::Rain => "☂",
            Self::Thunderstorm => "⚡",
            Self::Snow => "❄",
            Self::Fog => "≋",
        }
    }
}

impl fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn lookup<T: Copy>(table: &[(&str, T)], condition: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| *name == condition)
        .map(|(_, value)| *value)
}
