//! # Testbed - Provider Implementations
//!
//! Collaborators a test container can be composed from. Each implements a
//! port defined in `testbed-domain` (or `testbed-application` for mapping
//! profiles). The lifecycle decides which one is registered; the providers
//! themselves know nothing about tests.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Logging | `Logger` | Null, Mock, File |
//! | Profiling | `Profiler` | Void, Log |
//! | Cache | `RuntimeCache` | NoAppCache |
//! | File system | `FileSystem` | Null, Physical |
//! | Persistence | `DatabaseFactory` | FileDatabase |
//! | Mapping | `MappingProfile` | ContentType, User |
//! | Content | `UrlSegmentProvider`, `PublishedModelFactory` | Default, Noop |
//!
//! Discoverable property editors and components register themselves into
//! `testbed_application::ports::registry::DISCOVERABLE_TYPES` from the
//! [`content`] module. This crate must be linked for them to be found.

pub mod cache;
pub mod content;
pub mod filesystem;
pub mod logging;
pub mod mapping;
pub mod persistence;

// Re-export testbed-domain types commonly used with providers
pub use testbed_domain::error::{Error, Result};
