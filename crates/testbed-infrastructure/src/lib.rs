//! # Infrastructure Layer
//!
//! The per-test environment lifecycle: everything needed to build an
//! isolated container before a test and to restore process-wide state after
//! it.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Harness configuration, test options and their resolution |
//! | [`constants`] | File names, env prefixes and defaults |
//!
//! ### Container
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Capability container and its single-live-instance lifecycle |
//! | [`composition`] | Ordered registration stages |
//! | [`initialization`] | Post-registration setup |
//!
//! ### Isolation
//! | Module | Description |
//! |--------|-------------|
//! | [`state`] | Process-wide state and its reset procedures |
//! | [`reset`] | Reset pass and environment cleanup |
//! | [`session`] | First-test-in-session flag |
//! | [`harness`] | `set_up` / `tear_down` entry points |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Process-wide `tracing` subscriber |
//!
//! ## Lifecycle
//!
//! ```text
//! set_up:    reset -> resolve options -> create container -> compose
//!            -> initialize -> seal -> publish ambient container
//! tear_down: reset (disposes container) -> environment cleanup
//! ```

pub mod composition;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod harness;
pub mod initialization;
pub mod logging;
pub mod reset;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use config::{DatabaseMode, HarnessConfig, LoggerMode, TestOptions, TestOptionsOverride};
pub use di::{CapabilityKey, Container, ContainerLifecycle};
pub use error_ext::ErrorContext;
pub use harness::{FixtureHooks, NoHooks, TestHarness, TestPaths};
