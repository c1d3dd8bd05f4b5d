//! Mock logger
//!
//! An inert stand-in that reports every level as enabled so log call sites
//! (and the formatting they do) still execute, but keeps nothing.

use testbed_domain::ports::{LogLevel, Logger};

/// Logger that accepts everything and records nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct MockLogger;

impl MockLogger {
    /// Create a new mock logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for MockLogger {
    fn is_enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn log(&self, _level: LogLevel, _source: &str, _message: &str) {
        // Accepted and dropped
    }

    fn logger_name(&self) -> &str {
        "mock"
    }
}
