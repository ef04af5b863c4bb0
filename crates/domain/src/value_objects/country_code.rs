//! Country code value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// An ISO 3166-1 alpha-2 country code, stored uppercase (e.g. `NG`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse a two-letter code, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCountryCode` unless the input is exactly
    /// two ASCII letters.
    pub fn new(code: &str) -> Result<Self, DomainError> {
        let code = code.trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCountryCode(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Get the uppercase code
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Nigeria
    #[must_use]
    pub fn nigeria() -> Self {
        Self("NG".to_string())
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self::nigeria()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}
