//! Configuration
//!
//! Two layers of configuration exist:
//!
//! | Layer | Type | Source | Lifetime |
//! |-------|------|--------|----------|
//! | Harness | [`HarnessConfig`] | defaults, `testbed.toml`, `TESTBED__*` env | per harness |
//! | Test | [`TestOptions`] | fixture and method overrides | per test |
//!
//! Test options are declared as partial [`TestOptionsOverride`]s, collected
//! in an [`OptionsSource`] and merged by [`resolve_options`].

pub mod catalog;
pub mod loader;
pub mod options;
pub mod resolver;
pub mod types;

pub use catalog::{FixtureOptions, OptionsCatalog, OptionsSource};
pub use loader::ConfigLoader;
pub use options::{DatabaseMode, LoggerMode, TestOptions, TestOptionsOverride};
pub use resolver::{TestIdentity, resolve_options};
pub use types::{HarnessConfig, LoggingConfig, PluginScanConfig};
