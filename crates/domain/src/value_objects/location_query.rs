//! Location query value object
//!
//! Validates free-text location input and canonicalizes it into the form the
//! geocoder expects: lowercase words, with the first word separated from the
//! rest by a comma.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::LocationQuery;
//!
//! let query = LocationQuery::normalize("Ikeja Lagos").expect("valid query");
//! assert_eq!(query.as_str(), "ikeja,lagos");
//! assert_eq!(query.primary_token(), "ikeja");
//!
//! assert!(LocationQuery::normalize("ab").is_err());
//! assert!(LocationQuery::normalize("Lagos123!!").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Minimum number of characters (after trimming) a location query must have
pub const MIN_QUERY_LENGTH: usize = 3;

/// A validated, normalized location query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationQuery(String);

fn is_allowed(c: char) -> bool {
    c.is_alphabetic() || c.is_whitespace() || c == ','
}

/// Lowercase `text` and drop everything but letters, whitespace and commas
///
/// Lowercasing can add combining marks (`"İ"` becomes `"i\u{307}"`); those
/// are dropped, so place names compare equal to normalized query tokens.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase().chars().filter(|c| is_allowed(*c)).collect()
}

impl LocationQuery {
    /// Validate and normalize raw user input
    ///
    /// Only the first whitespace run becomes a comma, so `"new york city"`
    /// normalizes to `"new,york city"`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Rejected` if the trimmed input is shorter than
    /// [`MIN_QUERY_LENGTH`] characters or contains anything other than
    /// letters, whitespace and commas.
    pub fn normalize(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();

        if trimmed.chars().count() < MIN_QUERY_LENGTH {
            return Err(DomainError::rejected(format!(
                "must be at least {MIN_QUERY_LENGTH} characters"
            )));
        }

        if let Some(bad) = trimmed.chars().find(|c| !is_allowed(*c)) {
            return Err(DomainError::rejected(format!(
                "unexpected character {bad:?}"
            )));
        }

        let lowered = fold_case(trimmed);
        let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");

        Ok(Self(collapsed.replacen(' ', ",", 1)))
    }

    /// The normalized query sent to the geocoder
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the first comma, compared against candidate names
    #[must_use]
    pub fn primary_token(&self) -> &str {
        self.0.split(',').next().unwrap_or_default()
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocationQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
