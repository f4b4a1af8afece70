//! Tracing setup

use common::error::{Error, Result};
use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

use crate::config::{AppConfig, LogFormat};

/// Crate directives applied on top of the default level
const DIRECTIVES: &str = "tower_http=debug,api_gateway=debug,config_lookup=debug";

/// Log level for the given configuration
pub fn log_level(config: &AppConfig) -> Level {
    if config.debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global subscriber
///
/// Returns the chosen level. Installing twice is not an error; the first
/// subscriber stays in place.
pub fn init_tracing(config: &AppConfig) -> Result<Level> {
    let level = log_level(config);

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse(DIRECTIVES)
        .map_err(|e| Error::Configuration(format!("invalid log filter: {}", e)))?;

    let installed = match config.log_format {
        LogFormat::Pretty => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(env_filter)
                .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
                .finish();
            tracing::subscriber::set_global_default(subscriber).is_ok()
        }
        LogFormat::Json => {
            let subscriber = FmtSubscriber::builder()
                .json()
                .with_env_filter(env_filter)
                .finish();
            tracing::subscriber::set_global_default(subscriber).is_ok()
        }
    };

    if installed {
        tracing::info!(?level, format = ?config.log_format, "Tracing initialized");
        tracing::debug!("Debug logging enabled");
    }

    Ok(level)
}
