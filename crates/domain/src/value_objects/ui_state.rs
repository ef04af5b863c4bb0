//! UI status state machine
//!
//! `idle --Submit--> loading --Succeeded--> ready`, `loading --Failed--> idle`.
//! No state is terminal: `ready` accepts a new submission, and a submission
//! while `loading` is accepted too (concurrent submissions are not guarded).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Lifecycle status of the weather display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiState {
    /// Nothing shown, or the last lookup failed
    #[default]
    Idle,
    /// A lookup is in flight
    Loading,
    /// Weather for a resolved location is shown
    Ready,
}

/// Events that drive [`UiState`] transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiEvent {
    /// The user asked for weather (search or geolocation)
    Submit,
    /// Location resolved and weather rendered
    Succeeded,
    /// Any step of the lookup failed
    Failed,
}

impl UiState {
    /// Apply an event
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` for `Succeeded` or `Failed`
    /// outside of `Loading`.
    pub const fn next(self, event: UiEvent) -> Result<Self, DomainError> {
        match (self, event) {
            (_, UiEvent::Submit) => Ok(Self::Loading),
            (Self::Loading, UiEvent::Succeeded) => Ok(Self::Ready),
            (Self::Loading, UiEvent::Failed) => Ok(Self::Idle),
            (from, event) => Err(DomainError::InvalidTransition { from, event }),
        }
    }

    /// Lowercase name, as rendered
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
        }
    }
}

impl fmt::Display for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
