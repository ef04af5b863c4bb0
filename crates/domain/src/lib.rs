//! Domain layer for Skycast
//!
//! Contains the location query normalizer, weather and forecast entities,
//! the UI status state machine, and domain errors.
//! This layer performs no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
