//! Application ports

pub mod mapping;
pub mod registry;

pub use mapping::MappingProfile;
pub use registry::{DISCOVERABLE_TYPES, PluginTypeEntry, list_plugin_types, scan_plugin_types};
