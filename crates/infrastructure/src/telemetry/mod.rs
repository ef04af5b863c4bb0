//! Logging infrastructure
//!
//! Installs the `tracing` subscriber: an `EnvFilter` plus a human-readable
//! or JSON fmt layer writing to stderr.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_logging, resolve_filter};
