//! Skycast CLI
//!
//! Current conditions and a five day outlook from OpenWeatherMap.

#![allow(clippy::print_stdout)]

mod render;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{LocationResolver, WeatherReport, WeatherWidget};
use clap::{Parser, Subcommand};
use domain::value_objects::GeoLocation;
use infrastructure::{
    AppConfig, ConfiguredGeolocation, LocationConfig, WeatherAdapter, init_logging,
};
use tracing::{debug, info};

use crate::render::TerminalRenderer;

/// Skycast CLI
#[derive(Parser)]
#[command(name = "skycast")]
#[command(author, version, about = "Current weather and a five day outlook", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./skycast.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of the terminal view
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up weather for a city
    ///
    /// Example: skycast search ikeja lagos
    Search {
        /// City, optionally followed by region or country
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// Look up weather for the current position
    ///
    /// Uses --lat/--lon when given, otherwise location.default_location
    /// from the configuration.
    Here {
        /// Latitude in degrees
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude in degrees
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// Show the effective configuration
    ///
    /// The API key is never printed.
    Config,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Join the words of a city argument back into one query
fn city_query(words: &[String]) -> String {
    words.join(" ")
}

/// Position provider for `here`: explicit coordinates win over configuration
fn geolocation_for(
    lat: Option<f64>,
    lon: Option<f64>,
    config: &LocationConfig,
) -> anyhow::Result<ConfiguredGeolocation> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            let position = GeoLocation::new(lat, lon).context("invalid --lat/--lon")?;
            Ok(ConfiguredGeolocation::new(Some(position)))
        },
        _ => Ok(ConfiguredGeolocation::from_config(config)),
    }
}

fn print_report(
    report: &WeatherReport,
    renderer: &TerminalRenderer,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", renderer.frame());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;

    if matches!(cli.command, Commands::Config) {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    config.validate()?;
    debug!(?config, "Configuration loaded");

    let adapter = Arc::new(WeatherAdapter::with_config(config.weather.to_client_config())?);
    let renderer = Arc::new(TerminalRenderer::new(config.location.timezone));
    let resolver = LocationResolver::new(
        config.location.preferred_country.clone(),
        config.location.timezone,
    );
    let mut widget = WeatherWidget::new(adapter.clone(), adapter, renderer.clone())
        .with_resolver(resolver)
        .with_geocode_limit(config.weather.geocode_limit);

    let result = match cli.command {
        Commands::Search { city } => widget.search(&city_query(&city)).await,
        Commands::Here { lat, lon } => {
            let geolocation = geolocation_for(lat, lon, &config.location)?;
            widget.locate(&geolocation).await
        },
        Commands::Config => return Ok(()),
    };

    match result {
        Ok(Some(report)) => {
            info!(label = %report.location.display_label, "Lookup complete");
            print_report(&report, &renderer, cli.json)?;
        },
        Ok(None) => {
            println!("No location to look up. Pass a city, or --lat/--lon for `here`.");
        },
        Err(e) => {
            if cli.json {
                let body = serde_json::json!({
                    "error": e.user_message(),
                    "kind": e.kind(),
                });
                println!("{body}");
            } else {
                println!("{}", renderer.frame());
            }
            std::process::exit(1);
        },
    }

    Ok(())
}
