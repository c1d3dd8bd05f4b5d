//! Harness configuration types

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_SCAN_TARGETS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Process-wide logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Emit JSON lines instead of plain text
    pub json_format: bool,

    /// Additional log file for the lifecycle's own diagnostics
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Plugin discovery configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginScanConfig {
    /// Code units scanned for discoverable types
    pub scan_targets: Vec<String>,
}

impl Default for PluginScanConfig {
    fn default() -> Self {
        Self {
            scan_targets: DEFAULT_SCAN_TARGETS.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

/// Harness configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Root under which every fixture gets its working directory
    pub working_directory: PathBuf,

    /// Process-wide logging
    pub logging: LoggingConfig,

    /// Plugin discovery
    pub plugins: PluginScanConfig,

    /// TOML document declaring fixture and method options
    pub options_file: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            working_directory: std::env::temp_dir().join("testbed"),
            logging: LoggingConfig::default(),
            plugins: PluginScanConfig::default(),
            options_file: None,
        }
    }
}

impl HarnessConfig {
    /// Use `path` as working directory root
    pub fn with_working_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_directory = path.into();
        self
    }

    /// Scan `targets` for discoverable types
    pub fn with_scan_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plugins.scan_targets = targets.into_iter().map(Into::into).collect();
        self
    }
}
