//! Profiling logger
//!
//! Composed over whichever logger and profiler a test selected.

use std::sync::Arc;
use std::time::Instant;
use testbed_domain::ports::{LogLevel, Logger, Profiler};

/// Logger plus profiler, resolved by components that time their work
#[derive(Clone)]
pub struct ProfilingLogger {
    logger: Arc<dyn Logger>,
    profiler: Arc<dyn Profiler>,
}

impl ProfilingLogger {
    /// Compose a profiling logger
    pub fn new(logger: Arc<dyn Logger>, profiler: Arc<dyn Profiler>) -> Self {
        Self { logger, profiler }
    }

    /// Underlying logger
    pub fn logger(&self) -> Arc<dyn Logger> {
        Arc::clone(&self.logger)
    }

    /// Underlying profiler
    pub fn profiler(&self) -> Arc<dyn Profiler> {
        Arc::clone(&self.profiler)
    }

    /// Log if the level is enabled
    pub fn log(&self, level: LogLevel, source: &str, message: &str) {
        if self.logger.is_enabled(level) {
            self.logger.log(level, source, message);
        }
    }

    /// Log at debug level
    pub fn debug(&self, source: &str, message: &str) {
        self.log(LogLevel::Debug, source, message);
    }

    /// Log at info level
    pub fn info(&self, source: &str, message: &str) {
        self.log(LogLevel::Info, source, message);
    }

    /// Log at warn level
    pub fn warn(&self, source: &str, message: &str) {
        self.log(LogLevel::Warn, source, message);
    }

    /// Run `operation`, recording its duration with the profiler and the logger
    pub fn trace_duration<T>(&self, source: &str, name: &str, operation: impl FnOnce() -> T) -> T {
        let log_enabled = self.logger.is_enabled(LogLevel::Debug);
        if !self.profiler.is_recording() && !log_enabled {
            return operation();
        }

        let started = Instant::now();
        let result = operation();
        let elapsed = started.elapsed();

        self.profiler.record(name, elapsed);
        if log_enabled {
            self.logger.log(
                LogLevel::Debug,
                source,
                &format!("{name} completed in {}ms", elapsed.as_millis()),
            );
        }
        result
    }
}

impl std::fmt::Debug for ProfilingLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfilingLogger")
            .field("logger", &self.logger.logger_name())
            .field("profiler", &self.profiler.profiler_name())
            .finish()
    }
}
