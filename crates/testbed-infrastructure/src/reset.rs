//! Reset Manager
//!
//! Brings process-wide state back to its baseline. Runs at the
//! start of every set-up and as the first base step of every tear-down.
//!
//! Order:
//! 1. clear the ambient container accessor
//! 2. dispose the live container
//! 3. restore the virtual path base
//! 4. restore default settings
//! 5. uninstall the global mapping engine
//!
//! The plugin discovery cache and the legacy kind table are left alone.

use crate::config::TestOptions;
use crate::constants::{DATABASE_FILE_NAME, SETTINGS_FILE_NAME};
use crate::di::ContainerLifecycle;
use crate::harness::TestPaths;
use crate::state::{GLOBAL_STATE, current};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What a reset pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetReport {
    /// Steps run, in order
    pub steps: Vec<&'static str>,
    /// A live container was disposed
    pub container_disposed: bool,
    /// Failures, each prefixed with its step
    pub failures: Vec<String>,
}

/// What environment cleanup did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Paths removed
    pub removed: Vec<PathBuf>,
    /// Failures, each naming its path
    pub failures: Vec<String>,
}

/// Resets process-wide state and cleans up test environments
pub struct ResetManager;

impl ResetManager {
    /// Run a reset pass
    ///
    /// Never fails: a container that cannot release a resource is still
    /// removed from the live slot and the failure is reported.
    pub fn reset() -> ResetReport {
        let mut report = ResetReport::default();

        current::reset();
        report.steps.push("ambient_accessor");

        match ContainerLifecycle::dispose() {
            Ok(disposed) => report.container_disposed = disposed,
            Err(e) => {
                warn!(error = %e, "Live container disposed with failures");
                report.failures.push(format!("live_container: {e}"));
            }
        }
        report.steps.push("live_container");

        for entry in &GLOBAL_STATE {
            (entry.reset)();
            report.steps.push(entry.name);
        }

        debug!(steps = ?report.steps, disposed = report.container_disposed, "Reset global state");
        report
    }

    /// Remove what a test left on disk
    ///
    /// Best-effort per path: a failure is logged and reported and the
    /// remaining paths are still removed.
    pub fn cleanup_environment(options: &TestOptions, paths: &TestPaths, content_dirs: &[PathBuf]) -> CleanupReport {
        let mut report = CleanupReport::default();

        if options.application {
            for dir in content_dirs {
                remove_path(dir, &mut report);
            }
            remove_path(&paths.config.join(SETTINGS_FILE_NAME), &mut report);
        }

        if options.database.creates_database() {
            remove_path(&paths.data.join(DATABASE_FILE_NAME), &mut report);
        }

        debug!(removed = report.removed.len(), failures = report.failures.len(), "Cleaned up environment");
        report
    }
}

fn remove_path(path: &Path, report: &mut CleanupReport) {
    let result = if path.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };

    match result {
        Ok(()) => report.removed.push(path.to_path_buf()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to clean up");
            report.failures.push(format!("{}: {e}", path.display()));
        }
    }
}
