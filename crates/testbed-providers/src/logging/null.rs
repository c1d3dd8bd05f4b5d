//! Null logger
//!
//! Used when logging is disabled for a test: call sites guarded by
//! `is_enabled` are skipped entirely.

use testbed_domain::ports::{LogLevel, Logger};

/// Logger with every level disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl NullLogger {
    /// Create a new null logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NullLogger {
    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }

    fn log(&self, _level: LogLevel, _source: &str, _message: &str) {}

    fn logger_name(&self) -> &str {
        "null"
    }
}
