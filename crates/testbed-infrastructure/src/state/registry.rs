//! Global state registry
//!
//! The resettable entries in reset order, and snapshots used to assert that
//! a test left nothing behind.

use super::{current, mapping, settings, virtual_path};
use crate::di::ContainerLifecycle;
use std::path::PathBuf;
use testbed_domain::value_objects::Settings;

/// A resettable piece of process-wide state
#[derive(Debug, Clone, Copy)]
pub struct GlobalStateEntry {
    /// Entry name, used in reset reports
    pub name: &'static str,
    /// Restore the baseline
    pub reset: fn(),
    /// Whether the entry is at its baseline
    pub at_baseline: fn() -> bool,
}

/// Resettable entries restored after the live container is disposed
///
/// The ambient accessor is cleared before disposal and is not listed here.
pub const GLOBAL_STATE: [GlobalStateEntry; 3] = [
    GlobalStateEntry {
        name: "virtual_path_base",
        reset: virtual_path::reset,
        at_baseline: || virtual_path::base_override().is_none(),
    },
    GlobalStateEntry {
        name: "default_settings",
        reset: settings::reset,
        at_baseline: settings::is_default,
    },
    GlobalStateEntry {
        name: "mapping_engine",
        reset: mapping::reset,
        at_baseline: || !mapping::is_initialized(),
    },
];

/// Process-wide state that survives resets
pub const EXEMPT_STATE: [&str; 2] = ["plugin_discovery_cache", "legacy_kind_table"];

/// Observable value of every resettable entry
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalStateSnapshot {
    /// Ambient container published
    pub ambient_initialized: bool,
    /// A container is live
    pub live_container: bool,
    /// Virtual path base override
    pub virtual_path_base: Option<PathBuf>,
    /// Default settings
    pub settings: Settings,
    /// Global mapping engine installed
    pub mapping_engine_initialized: bool,
}

impl GlobalStateSnapshot {
    /// Capture the current state
    pub fn capture() -> Self {
        Self {
            ambient_initialized: current::is_initialized(),
            live_container: ContainerLifecycle::is_live(),
            virtual_path_base: virtual_path::base_override(),
            settings: (*settings::current()).clone(),
            mapping_engine_initialized: mapping::is_initialized(),
        }
    }

    /// State of a process where no test has run
    pub fn baseline() -> Self {
        Self {
            ambient_initialized: false,
            live_container: false,
            virtual_path_base: None,
            settings: Settings::default(),
            mapping_engine_initialized: false,
        }
    }

    /// Whether this snapshot equals the baseline
    pub fn is_at_baseline(&self) -> bool {
        *self == Self::baseline()
    }
}
