//! Tracing subscriber setup.

use crate::config::LoggingConfig;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::ParseError};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Parse the configured filter directives
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    Ok(EnvFilter::try_new(&config.filter)?)
}

/// Install the global `tracing` subscriber
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(
        message = "Tracing initialized",
        filter = %config.filter,
        json = config.json,
    );

    Ok(())
}
