//! Subscriber setup and configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, one line per event
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives (e.g., "info", "skycast=debug,reqwest=warn")
    ///
    /// `RUST_LOG` takes precedence when set.
    #[serde(default)]
    pub filter: Option<String>,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

/// Logging setup errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Filter directives could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// A global subscriber was already installed
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Pick the filter directives: `RUST_LOG`, then the configured filter, then
/// `fallback`
#[must_use]
pub fn resolve_filter(env: Option<&str>, config: &LoggingConfig, fallback: &str) -> String {
    env.filter(|v| !v.trim().is_empty())
        .or(config.filter.as_deref())
        .unwrap_or(fallback)
        .to_string()
}

/// Install the global subscriber
///
/// `fallback` is used when neither `RUST_LOG` nor `config.filter` is set;
/// the CLI derives it from its verbosity flag.
pub fn init_logging(config: &LoggingConfig, fallback: &str) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = resolve_filter(rust_log.as_deref(), config, fallback);
    let env_filter =
        EnvFilter::try_new(&directives).map_err(|e| TelemetryError::InvalidFilter {
            filter: directives.clone(),
            reason: e.to_string(),
        })?;

    let fmt_layer = match config.format {
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(filter = %directives, format = ?config.format, "Logging initialized");
    Ok(())
}
