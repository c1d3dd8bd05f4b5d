//! # Testbed Domain Layer
//!
//! Contracts shared by every layer of the per-test composition lifecycle.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error type and `Result` alias |
//! | [`ports`] | Capability contracts wired into a test container |
//! | [`value_objects`] | Settings, plugin kinds and the domain shapes used by mapping |
//! | [`constants`] | Capability role names and plugin code units |
//!
//! Nothing in this crate holds process-wide state. Global singletons and
//! their reset procedures live in `testbed-infrastructure`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
