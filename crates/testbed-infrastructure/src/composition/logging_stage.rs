//! Logging stage

use super::stage::{CompositionContext, CompositionStage};
use crate::config::LoggerMode;
use crate::constants::LOG_FILE_NAME;
use crate::di::Container;
use std::sync::Arc;
use testbed_application::ProfilingLogger;
use testbed_domain::error::Result;
use testbed_domain::ports::{LogLevel, Logger, Profiler};
use testbed_providers::logging::{FileLogger, LogProfiler, MockLogger, NullLogger, VoidProfiler};

/// Registers the logger, the profiler and the profiling logger over both
pub struct LoggingStage;

fn file_log_level(level: &str) -> LogLevel {
    match level.to_lowercase().as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

impl CompositionStage for LoggingStage {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn compose(&self, container: &Container, context: &CompositionContext<'_>) -> Result<()> {
        let logger: Arc<dyn Logger> = match context.options.logger {
            LoggerMode::Disabled => Arc::new(NullLogger),
            LoggerMode::Mock => Arc::new(MockLogger),
            LoggerMode::Real => {
                let file_logger = Arc::new(FileLogger::open(
                    &context.paths.logs,
                    LOG_FILE_NAME,
                    file_log_level(&context.config.logging.level),
                )?);
                container.track_disposable(file_logger.clone())?;
                file_logger
            }
        };
        let profiler: Arc<dyn Profiler> = match context.options.logger {
            LoggerMode::Real => Arc::new(LogProfiler::new(Arc::clone(&logger))),
            LoggerMode::Disabled | LoggerMode::Mock => Arc::new(VoidProfiler),
        };

        container.register_instance::<dyn Logger>(Arc::clone(&logger))?;
        container.register_instance::<dyn Profiler>(Arc::clone(&profiler))?;
        container.register_instance(Arc::new(ProfilingLogger::new(logger, profiler)))
    }
}
