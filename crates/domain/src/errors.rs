//! Domain-level errors

use thiserror::Error;

use crate::value_objects::{UiEvent, UiState};

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Location input failed validation
    #[error("Rejected location query: {0}")]
    Rejected(String),

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Not a two-letter ISO 3166-1 alpha-2 code
    #[error("Invalid country code: {0}")]
    InvalidCountryCode(String),

    /// Unknown IANA timezone name
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// UI state machine received an event it cannot handle in its current state
    #[error("Invalid transition: {event:?} while {from:?}")]
    InvalidTransition { from: UiState, event: UiEvent },
}

impl DomainError {
    /// Create a rejected-query error
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}
