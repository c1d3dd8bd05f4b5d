//! Application settings
//!
//! The process keeps one default settings value that tests may mutate; the
//! reset pass restores it to `Settings::default()`.

use serde::{Deserialize, Serialize};

/// Settings consumed by composed components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Application name shown in diagnostics
    pub application_name: String,

    /// Debug mode
    pub debug: bool,

    /// Default UI language
    pub default_ui_language: String,

    /// Paths never routed to content
    pub reserved_paths: Vec<String>,

    /// Emit URLs without a file extension
    pub use_directory_urls: bool,

    /// Virtual path of the media root
    pub media_path: String,

    /// Virtual path of the scripts root
    pub scripts_path: String,

    /// Virtual path of the stylesheets root
    pub stylesheets_path: String,

    /// Virtual path of the partial views root
    pub partial_views_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            application_name: "testbed".to_string(),
            debug: false,
            default_ui_language: "en-US".to_string(),
            reserved_paths: vec!["~/install/".to_string(), "~/config/".to_string()],
            use_directory_urls: true,
            media_path: "~/media".to_string(),
            scripts_path: "~/scripts".to_string(),
            stylesheets_path: "~/css".to_string(),
            partial_views_path: "~/views/partials".to_string(),
        }
    }
}

impl Settings {
    /// Virtual path configured for a file system role, if the role is known
    pub fn path_for_role(&self, role: &str) -> Option<&str> {
        use crate::constants::{FS_MEDIA, FS_PARTIAL_VIEWS, FS_SCRIPTS, FS_STYLESHEETS};
        match role {
            FS_MEDIA => Some(&self.media_path),
            FS_SCRIPTS => Some(&self.scripts_path),
            FS_STYLESHEETS => Some(&self.stylesheets_path),
            FS_PARTIAL_VIEWS => Some(&self.partial_views_path),
            _ => None,
        }
    }
}
