//! Structured logging with tracing
//!
//! Configures the tracing subscriber from the logging section of the
//! application config. The `COURSEREC_LOG` environment variable, when
//! set, overrides the configured level with a full filter directive.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;
use courserec_domain::error::{Error, Result};

/// Initialize logging with the provided configuration
///
/// Returns a configuration error when a global subscriber is already
/// installed, so callers can decide whether that matters.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = if config.json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    };

    result.map_err(|e| Error::config(format!("failed to initialize logging: {e}")))
}

/// Parse a log level string to a tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}
