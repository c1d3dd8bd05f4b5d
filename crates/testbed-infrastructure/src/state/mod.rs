//! Process-wide state
//!
//! Every piece of mutable state that outlives a single test lives here, each
//! in its own module with an explicit reset procedure.
//!
//! | Entry | Baseline | Reset by |
//! |-------|----------|----------|
//! | [`current`] ambient container | empty | every reset pass |
//! | [`virtual_path`] base override | none | every reset pass |
//! | [`settings`] default settings | `Settings::default()` | every reset pass |
//! | [`mapping`] global engine | not activated | every reset pass |
//! | [`plugin_cache`] discovery result | empty | forced rescan only |
//! | [`legacy_kinds`] kind table | empty | never |
//!
//! [`registry`] lists the resettable entries and captures snapshots for
//! isolation checks.

pub mod current;
pub mod legacy_kinds;
pub mod mapping;
pub mod plugin_cache;
pub mod registry;
pub mod settings;
pub mod virtual_path;

pub use plugin_cache::{DiscoveryOutcome, PluginDiscoveryCache};
pub use registry::{EXEMPT_STATE, GLOBAL_STATE, GlobalStateEntry, GlobalStateSnapshot};
