//! Profilers

use std::sync::Arc;
use std::time::Duration;
use testbed_domain::ports::{LogLevel, Logger, Profiler};

/// Profiler that keeps nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidProfiler;

impl VoidProfiler {
    /// Create a new void profiler
    pub fn new() -> Self {
        Self
    }
}

impl Profiler for VoidProfiler {
    fn is_recording(&self) -> bool {
        false
    }

    fn record(&self, _name: &str, _elapsed: Duration) {}

    fn profiler_name(&self) -> &str {
        "void"
    }
}

/// Profiler writing each timing to a logger at debug level
pub struct LogProfiler {
    logger: Arc<dyn Logger>,
}

impl LogProfiler {
    /// Create a profiler over `logger`
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl Profiler for LogProfiler {
    fn is_recording(&self) -> bool {
        true
    }

    fn record(&self, name: &str, elapsed: Duration) {
        if self.logger.is_enabled(LogLevel::Debug) {
            self.logger.log(
                LogLevel::Debug,
                "profiler",
                &format!("[{name}] {}us", elapsed.as_micros()),
            );
        }
    }

    fn profiler_name(&self) -> &str {
        "log"
    }
}
