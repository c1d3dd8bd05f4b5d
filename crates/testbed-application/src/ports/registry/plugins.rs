//! Plugin Type Registry
//!
//! Discoverable component types register themselves via
//! `linkme::distributed_slice` and are found at runtime by scanning.

use testbed_domain::value_objects::PluginKind;

/// Registry entry for a discoverable component type
#[derive(Debug)]
pub struct PluginTypeEntry {
    /// Unique type name (e.g., "Testbed.TextBox")
    pub name: &'static str,
    /// Code unit that declares the type; only scan-target units are discovered
    pub unit: &'static str,
    /// What kind of component this is
    pub kind: PluginKind,
    /// Human-readable description
    pub description: &'static str,
    /// Numeric id used by legacy lookup tables, for built-in kinds
    pub legacy_id: Option<i32>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static DISCOVERABLE_TYPES: [PluginTypeEntry] = [..];

/// Scan the registry for types declared in one of `targets`
///
/// Link order is not stable, so the result is sorted by unit then name.
pub fn scan_plugin_types(targets: &[String]) -> Vec<&'static PluginTypeEntry> {
    let mut found: Vec<&'static PluginTypeEntry> = DISCOVERABLE_TYPES
        .iter()
        .filter(|entry| targets.iter().any(|target| target == entry.unit))
        .collect();
    found.sort_by(|a, b| (a.unit, a.name).cmp(&(b.unit, b.name)));
    found
}

/// List all registered types
///
/// Returns `(name, unit)` tuples regardless of scan targets. Useful for
/// diagnostics when a type is unexpectedly missing from a scan.
pub fn list_plugin_types() -> Vec<(&'static str, &'static str)> {
    DISCOVERABLE_TYPES
        .iter()
        .map(|entry| (entry.name, entry.unit))
        .collect()
}
