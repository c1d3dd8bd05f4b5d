//! Discoverable Type Registry
//!
//! Defines the auto-registration infrastructure for plugin types.
//! Uses the `linkme` crate for compile-time registration of types that are
//! discovered at runtime by scanning a fixed set of code units.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Plugin Registration Flow                      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(DISCOVERABLE_TYPES)] │
//! │                        static ENTRY: PluginTypeEntry = ...      │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static DISCOVERABLE_TYPES: [..]      │
//! │                              ↓                                  │
//! │  3. Scan filters:      entries whose unit is a scan target      │
//! │                              ↓                                  │
//! │  4. PluginManager keeps the result (cached across tests)        │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ### Registering a Type (in testbed-providers)
//!
//! ```ignore
//! use testbed_application::ports::registry::{PluginTypeEntry, DISCOVERABLE_TYPES};
//!
//! #[linkme::distributed_slice(DISCOVERABLE_TYPES)]
//! static TEXTBOX: PluginTypeEntry = PluginTypeEntry {
//!     name: "Testbed.TextBox",
//!     unit: UNIT_CORE,
//!     kind: PluginKind::PropertyEditor,
//!     description: "Single line text",
//!     legacy_id: Some(-88),
//! };
//! ```

pub mod plugins;

pub use plugins::{DISCOVERABLE_TYPES, PluginTypeEntry, list_plugin_types, scan_plugin_types};
