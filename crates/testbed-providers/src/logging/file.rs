//! File logger
//!
//! Real-backed logger: each instance owns its own `tracing` dispatch writing
//! through a non-blocking `tracing-appender` file writer, so messages never
//! reach (or depend on) the process-wide subscriber. The flush guard is the
//! owned resource released when the container is disposed.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use testbed_domain::error::{Error, Result};
use testbed_domain::ports::{Disposable, LogLevel, Logger};
use tracing::Dispatch;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Logger writing into a file
pub struct FileLogger {
    path: PathBuf,
    min_level: LogLevel,
    dispatch: Dispatch,
    guard: Mutex<Option<WorkerGuard>>,
}

impl FileLogger {
    /// Open `directory/file_name` for logging at `min_level` and above
    pub fn open(directory: &Path, file_name: &str, min_level: LogLevel) -> Result<Self> {
        std::fs::create_dir_all(directory).map_err(|e| {
            Error::io_with_source(
                format!("Failed to create log directory {}", directory.display()),
                e,
            )
        })?;

        let appender = tracing_appender::rolling::never(directory, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .with_max_level(to_tracing_level(min_level))
            .finish();

        Ok(Self {
            path: directory.join(file_name),
            min_level,
            dispatch: Dispatch::new(subscriber),
            guard: Mutex::new(Some(guard)),
        })
    }

    /// Log file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_open(&self) -> bool {
        self.guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

impl Logger for FileLogger {
    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level && self.is_open()
    }

    fn log(&self, level: LogLevel, source: &str, message: &str) {
        if !self.is_enabled(level) {
            return;
        }
        tracing::dispatcher::with_default(&self.dispatch, || match level {
            LogLevel::Trace => tracing::trace!(source = %source, "{message}"),
            LogLevel::Debug => tracing::debug!(source = %source, "{message}"),
            LogLevel::Info => tracing::info!(source = %source, "{message}"),
            LogLevel::Warn => tracing::warn!(source = %source, "{message}"),
            LogLevel::Error => tracing::error!(source = %source, "{message}"),
        });
    }

    fn logger_name(&self) -> &str {
        "file"
    }
}

impl Disposable for FileLogger {
    fn dispose(&self) -> Result<()> {
        // Dropping the guard flushes pending lines and stops the writer thread
        let guard = self
            .guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        drop(guard);
        Ok(())
    }

    fn resource_name(&self) -> &str {
        "file logger"
    }
}

impl std::fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileLogger")
            .field("path", &self.path)
            .field("min_level", &self.min_level)
            .field("open", &self.is_open())
            .finish()
    }
}
