//! Plugin kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a discoverable component type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginKind {
    /// Property editor (has a legacy numeric id when built in)
    PropertyEditor,
    /// URL segment provider
    UrlSegmentProvider,
    /// Persistence mapper
    Mapper,
    /// Anything else composed at start-up
    Component,
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PropertyEditor => "property_editor",
            Self::UrlSegmentProvider => "url_segment_provider",
            Self::Mapper => "mapper",
            Self::Component => "component",
        };
        f.write_str(name)
    }
}
