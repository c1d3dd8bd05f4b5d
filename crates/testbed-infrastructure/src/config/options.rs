//! Per-test options
//!
//! [`TestOptions`] is the effective configuration of one test, computed once
//! before the container is created and never mutated afterwards.
//! [`TestOptionsOverride`] is the partial form declared on a fixture or a
//! method.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which logger a test gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerMode {
    /// Every level disabled
    Disabled,
    /// Inert stand-in reporting every level enabled
    #[default]
    Mock,
    /// File logger under the fixture's log directory
    Real,
}

/// What database a test gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DatabaseMode {
    /// No database; the capability is disabled
    #[default]
    #[serde(rename = "none")]
    None,
    /// Fresh database with the schema installed
    #[serde(rename = "create")]
    NewSchema,
    /// Database file without schema
    #[serde(rename = "empty")]
    NewEmpty,
}

impl DatabaseMode {
    /// Whether a database file exists on disk during the test
    pub fn creates_database(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Surface name used in option documents
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NewSchema => "create",
            Self::NewEmpty => "empty",
        }
    }
}

impl fmt::Display for DatabaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LoggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Disabled => "disabled",
            Self::Mock => "mock",
            Self::Real => "real",
        })
    }
}

/// Effective configuration of one test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TestOptions {
    /// Logger selection
    pub logger: LoggerMode,
    /// Register mapping profiles and activate the global mapping engine
    pub mapping: bool,
    /// Database selection
    pub database: DatabaseMode,
    /// Wire the application graph (file systems, settings, services)
    pub application: bool,
    /// Discard the cached plugin scan and scan again
    pub force_plugin_rescan: bool,
}

/// Options declared on a fixture or a method; unset fields fall through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestOptionsOverride {
    /// Logger selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logger: Option<LoggerMode>,
    /// Mapping flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<bool>,
    /// Database selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseMode>,
    /// Application flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<bool>,
    /// Rescan flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_plugin_rescan: Option<bool>,
}

impl TestOptionsOverride {
    /// Override with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logger mode
    pub fn with_logger(mut self, logger: LoggerMode) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Set the mapping flag
    pub fn with_mapping(mut self, mapping: bool) -> Self {
        self.mapping = Some(mapping);
        self
    }

    /// Set the database mode
    pub fn with_database(mut self, database: DatabaseMode) -> Self {
        self.database = Some(database);
        self
    }

    /// Set the application flag
    pub fn with_application(mut self, application: bool) -> Self {
        self.application = Some(application);
        self
    }

    /// Set the rescan flag
    pub fn with_force_plugin_rescan(mut self, rescan: bool) -> Self {
        self.force_plugin_rescan = Some(rescan);
        self
    }

    /// Field-by-field merge where `self` wins over `fallback`
    pub fn over(self, fallback: Self) -> Self {
        Self {
            logger: self.logger.or(fallback.logger),
            mapping: self.mapping.or(fallback.mapping),
            database: self.database.or(fallback.database),
            application: self.application.or(fallback.application),
            force_plugin_rescan: self.force_plugin_rescan.or(fallback.force_plugin_rescan),
        }
    }

    /// Fill unset fields from the global defaults
    pub fn resolve(self) -> TestOptions {
        let defaults = TestOptions::default();
        TestOptions {
            logger: self.logger.unwrap_or(defaults.logger),
            mapping: self.mapping.unwrap_or(defaults.mapping),
            database: self.database.unwrap_or(defaults.database),
            application: self.application.unwrap_or(defaults.application),
            force_plugin_rescan: self
                .force_plugin_rescan
                .unwrap_or(defaults.force_plugin_rescan),
        }
    }
}

impl From<TestOptions> for TestOptionsOverride {
    fn from(options: TestOptions) -> Self {
        Self {
            logger: Some(options.logger),
            mapping: Some(options.mapping),
            database: Some(options.database),
            application: Some(options.application),
            force_plugin_rescan: Some(options.force_plugin_rescan),
        }
    }
}
