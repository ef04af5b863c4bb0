//! Timezone value object

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A validated IANA timezone
///
/// Forecast entries are grouped into calendar days in this zone, so the
/// choice decides which entries land on the same day near midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timezone(Tz);

impl Timezone {
    /// Parse an IANA timezone name (e.g. `Africa/Lagos`)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the name is not in the
    /// IANA database.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        name.trim()
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
    }

    /// Get the timezone name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0.name()
    }

    /// Check if this is a UTC timezone
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.as_str(), "UTC" | "Etc/UTC" | "Etc/GMT")
    }

    /// Convert a unix timestamp (seconds) to a zoned datetime
    ///
    /// Returns `None` when the timestamp is outside chrono's range.
    #[must_use]
    pub fn datetime(&self, timestamp: i64) -> Option<DateTime<Tz>> {
        DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(&self.0))
    }

    /// Calendar day of a unix timestamp (seconds) in this zone
    #[must_use]
    pub fn local_date(&self, timestamp: i64) -> Option<NaiveDate> {
        self.datetime(timestamp).map(|dt| dt.date_naive())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timezone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Timezone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Timezone> for String {
    fn from(tz: Timezone) -> Self {
        tz.as_str().to_string()
    }
}

/// Common timezone constants
impl Timezone {
    /// UTC timezone
    #[must_use]
    pub const fn utc() -> Self {
        Self(Tz::UTC)
    }

    /// Africa/Lagos timezone (UTC+1, no DST)
    #[must_use]
    pub const fn lagos() -> Self {
        Self(Tz::Africa__Lagos)
    }

    /// America/New_York timezone
    #[must_use]
    pub const fn new_york() -> Self {
        Self(Tz::America__New_York)
    }
}
