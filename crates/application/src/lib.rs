//! Application layer - Use cases and orchestration
//!
//! Contains the location resolver, the weather widget workflow and the port
//! definitions the infrastructure layer implements.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, FailureKind, USER_FAILURE_MESSAGE};
pub use ports::*;
pub use services::*;
