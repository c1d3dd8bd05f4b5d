//! Structured logging with tracing
//!
//! Process-wide subscriber for the lifecycle's own diagnostics. This is
//! separate from the per-test `Logger` capability: the subscriber is
//! installed once per process and survives every reset.

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_FILTER;
use std::path::Path;
use testbed_domain::error::{Error, Result};
use tracing::{Level, debug, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// Returns `false` when a global subscriber was already installed (by an
/// earlier harness or by the test runner); that is not an error.
pub fn init_logging(config: &LoggingConfig) -> Result<bool> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_FILTER).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::never(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("testbed-harness.log")),
        )
    });

    // Layer types differ between plain and JSON output, hence the branches
    let installed = if config.json_format {
        let stdout = fmt::layer().json().with_target(true).with_test_writer();
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stdout).with(file).try_init().is_ok()
        } else {
            registry.with(stdout).try_init().is_ok()
        }
    } else {
        let stdout = fmt::layer().with_target(true).with_test_writer();
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stdout).with(file).try_init().is_ok()
        } else {
            registry.with(stdout).try_init().is_ok()
        }
    };

    if installed {
        info!("Logging initialized with level: {}", level);
    } else {
        debug!("Global subscriber already installed; keeping it");
    }
    Ok(installed)
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
