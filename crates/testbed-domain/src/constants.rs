//! Domain constants
//!
//! Names used as capability qualifiers and plugin code units.

// ============================================================================
// FILE SYSTEM ROLES
// ============================================================================

/// Media file system (inert stand-in in tests)
pub const FS_MEDIA: &str = "media";

/// Scripts file system (physical)
pub const FS_SCRIPTS: &str = "scripts";

/// Stylesheets file system (physical)
pub const FS_STYLESHEETS: &str = "stylesheets";

/// Partial views file system (physical)
pub const FS_PARTIAL_VIEWS: &str = "partial_views";

/// Roles backed by real on-disk directories
pub const PHYSICAL_FILE_SYSTEM_ROLES: [&str; 3] = [FS_SCRIPTS, FS_STYLESHEETS, FS_PARTIAL_VIEWS];

/// Every file system role registered by the application stage
pub const ALL_FILE_SYSTEM_ROLES: [&str; 4] = [FS_MEDIA, FS_SCRIPTS, FS_STYLESHEETS, FS_PARTIAL_VIEWS];

// ============================================================================
// PLUGIN CODE UNITS
// ============================================================================

/// Core component unit
pub const UNIT_CORE: &str = "testbed.core";

/// Web component unit
pub const UNIT_WEB: &str = "testbed.web";

/// Optional extensions unit, not scanned by default
pub const UNIT_EXTENSIONS: &str = "testbed.extensions";
