//! Application-level errors

use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// The one message shown to the user for every failed lookup
pub const USER_FAILURE_MESSAGE: &str = "City not found. Please try again.";

/// Errors that can occur in the application layer
///
/// The three kinds stay distinct for callers and logs even though the user
/// sees the same message for each.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Input failed validation before any request was made
    #[error(transparent)]
    Rejected(#[from] DomainError),

    /// The geocoder returned no candidates
    #[error("No location matches '{0}'")]
    NoMatch(String),

    /// A network, status or decoding failure in any external call
    #[error("Transport failure: {0}")]
    TransportFailure(String),
}

/// Coarse classification of an [`ApplicationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Rejected,
    NoMatch,
    TransportFailure,
}

impl ApplicationError {
    /// Create a transport failure
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportFailure(message.into())
    }

    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Rejected(_) => FailureKind::Rejected,
            Self::NoMatch(_) => FailureKind::NoMatch,
            Self::TransportFailure(_) => FailureKind::TransportFailure,
        }
    }

    /// Message to display, identical for every kind
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        USER_FAILURE_MESSAGE
    }
}
