//! Infrastructure constants

use testbed_domain::constants::{UNIT_CORE, UNIT_WEB};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration file looked up in the current and user config directories
pub const DEFAULT_CONFIG_FILENAME: &str = "testbed.toml";

/// Configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "testbed";

/// Environment variable prefix (`TESTBED__LOGGING__LEVEL=debug`)
pub const CONFIG_ENV_PREFIX: &str = "TESTBED";

/// Separator for nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// Logging
// ============================================================================

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV_FILTER: &str = "TESTBED_LOG";

/// Default level of the process-wide subscriber
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log file written by the real logger
pub const LOG_FILE_NAME: &str = "testbed.log";

// ============================================================================
// Working directory layout
// ============================================================================

/// Directory under the working root holding per-fixture directories
pub const FIXTURES_DIR: &str = "fixtures";

/// Log directory under a fixture directory
pub const LOGS_DIR: &str = "logs";

/// Data directory under a fixture directory
pub const DATA_DIR: &str = "data";

/// Config directory under a fixture directory
pub const CONFIG_DIR: &str = "config";

/// Settings file written by the application bootstrap
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Database file created by the persistence stage
pub const DATABASE_FILE_NAME: &str = "testbed.db.json";

// ============================================================================
// Plugin discovery
// ============================================================================

/// Code units scanned when the configuration names none
pub const DEFAULT_SCAN_TARGETS: [&str; 2] = [UNIT_CORE, UNIT_WEB];
