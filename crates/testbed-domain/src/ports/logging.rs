//! Logging and profiling ports

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Severity of a log message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Very verbose diagnostics
    Trace,
    /// Debugging diagnostics
    Debug,
    /// Informational messages
    Info,
    /// Recoverable problems
    Warn,
    /// Failures
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Logger capability
///
/// Components resolve this from the container instead of reaching for a
/// global subscriber, so a test decides whether logging goes nowhere, into
/// an inert stand-in, or into a real file.
pub trait Logger: Send + Sync {
    /// Whether messages at `level` would be written
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Write a message attributed to `source`
    fn log(&self, level: LogLevel, source: &str, message: &str);

    /// Implementation name for diagnostics
    fn logger_name(&self) -> &str;
}

/// Profiler capability
pub trait Profiler: Send + Sync {
    /// Whether timings are kept; callers skip measuring when this is false
    fn is_recording(&self) -> bool;

    /// Record how long the operation `name` took
    fn record(&self, name: &str, elapsed: Duration);

    /// Implementation name for diagnostics
    fn profiler_name(&self) -> &str;
}
