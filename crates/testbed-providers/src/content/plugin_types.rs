//! Discoverable types declared by this crate
//!
//! Each entry is submitted to the registry at link time. Types declared in
//! the extensions unit are only found when a test configuration adds that
//! unit to its scan targets.

use testbed_application::ports::registry::{DISCOVERABLE_TYPES, PluginTypeEntry};
use testbed_domain::constants::{UNIT_CORE, UNIT_EXTENSIONS, UNIT_WEB};
use testbed_domain::value_objects::PluginKind;

// ============================================================================
// Property editors
// ============================================================================

#[linkme::distributed_slice(DISCOVERABLE_TYPES)]
static TEXT_BOX: PluginTypeEntry = PluginTypeEntry {
    name: "Testbed.TextBox",
    unit: UNIT_CORE,
    kind: PluginKind::PropertyEditor,
    description: "Textbox",
    legacy_id: Some(-88),
};

#[linkme::distributed_slice(DISCOVERABLE_TYPES)]
static TEXT_AREA: PluginTypeEntry = PluginTypeEntry {
    name: "Testbed.TextArea",
    unit: UNIT_CORE,
    kind: PluginKind::PropertyEditor,
    description: "Textarea",
    legacy_id: Some(-89),
};

#[linkme::distributed_slice(DISCOVERABLE_TYPES)]
static TRUE_FALSE: PluginTypeEntry = PluginTypeEntry {
    name: "Testbed.TrueFalse",
    unit: UNIT_CORE,
    kind: PluginKind::PropertyEditor,
    description: "Checkbox",
    legacy_id: Some(-49),
};

#[linkme::distributed_slice(DISCOVERABLE_TYPES)]
static DATE_TIME: PluginTypeEntry = PluginTypeEntry {
    name: "Testbed.DateTime",
    unit: UNIT_CORE,
    kind: PluginKind::PropertyEditor,
    description: "Date/Time picker",
    legacy_id: Some(-36),
};

#[linkme::distributed_slice(DISCOVERABLE_TYPES)]
static CONTENT_PICKER: PluginTypeEntry = PluginTypeEntry {
    name: "Testbed.ContentPicker",
    unit: UNIT_WEB,
    kind: PluginKind::PropertyEditor,
    description: "Content picker",
    legacy_id: Some(1046),
};

#[linkme::distributed_slice(DISCOVERABLE_TYPES)]
static MEDIA_PICKER: PluginTypeEntry = PluginTypeEntry {
    name: "Testbed.MediaPicker",
    unit: UNIT_WEB,
    kind: PluginKind::PropertyEditor,
    description: "Media picker",
    legacy_id: Some(1048),
};

#[linkme::distributed_slice(DISCOVERABLE_TYPES)]
static COLOR_PICKER: PluginTypeEntry = PluginTypeEntry {
    name: "Testbed.ColorPicker",
    unit: UNIT_EXTENSIONS,
    kind: PluginKind::PropertyEditor,
    description: "Color picker",
    legacy_id: None,
};

// ============================================================================
// Other components
// ============================================================================

#[linkme::distributed_slice(DISCOVERABLE_TYPES)]
static DEFAULT_URL_SEGMENTS: PluginTypeEntry = PluginTypeEntry {
    name: "Testbed.DefaultUrlSegmentProvider",
    unit: UNIT_CORE,
    kind: PluginKind::UrlSegmentProvider,
    description: "Lowercased, dash-separated URL segments",
    legacy_id: None,
};

#[linkme::distributed_slice(DISCOVERABLE_TYPES)]
static CONTENT_MAPPER: PluginTypeEntry = PluginTypeEntry {
    name: "Testbed.ContentMapper",
    unit: UNIT_CORE,
    kind: PluginKind::Mapper,
    description: "Maps content to the nodes table",
    legacy_id: None,
};

#[linkme::distributed_slice(DISCOVERABLE_TYPES)]
static PUBLISHED_CACHE_REFRESHER: PluginTypeEntry = PluginTypeEntry {
    name: "Testbed.PublishedCacheRefresher",
    unit: UNIT_WEB,
    kind: PluginKind::Component,
    description: "Refreshes published content after saves",
    legacy_id: None,
};

/// Names of the types this module registers, for diagnostics
pub fn declared_type_names() -> [&'static str; 10] {
    [
        TEXT_BOX.name,
        TEXT_AREA.name,
        TRUE_FALSE.name,
        DATE_TIME.name,
        CONTENT_PICKER.name,
        MEDIA_PICKER.name,
        COLOR_PICKER.name,
        DEFAULT_URL_SEGMENTS.name,
        CONTENT_MAPPER.name,
        PUBLISHED_CACHE_REFRESHER.name,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use testbed_application::ports::scan_plugin_types;

    #[test]
    fn test_extension_unit_is_scanned_only_on_request() {
        let default_scan = scan_plugin_types(&[UNIT_CORE.to_string(), UNIT_WEB.to_string()]);
        assert!(default_scan.iter().all(|t| t.name != "Testbed.ColorPicker"));

        let extended = scan_plugin_types(&[UNIT_EXTENSIONS.to_string()]);
        assert_eq!(extended.len(), 1);
        assert_eq!(extended[0].name, "Testbed.ColorPicker");
    }

    #[test]
    fn test_declared_types_are_registered() {
        let registered = testbed_application::ports::list_plugin_types();
        for name in declared_type_names() {
            assert!(registered.iter().any(|(n, _)| *n == name), "{name} missing");
        }
    }
}
