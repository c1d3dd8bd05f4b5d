//! Application Layer - Testbed
//!
//! Pieces that sit between the capability ports and the concrete providers:
//!
//! - `ports::registry`: the discoverable-type slice providers register into
//! - `ports::mapping`: the mapping-rule provider contract
//! - [`plugins`]: scanning the registry into a [`plugins::PluginManager`]
//! - [`mapping`]: the mapping configuration and engine
//! - [`collections`]: ordered collection builders (mappers, property editors,
//!   URL segment providers)
//! - [`logging`]: the profiling logger composed from a logger and a profiler
//! - [`services`]: the service layer handed to tests
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `testbed-domain`: ports, value objects and the error type
//! - Pure Rust libraries for serialization, logging and registration

pub mod collections;
pub mod logging;
pub mod mapping;
pub mod plugins;
pub mod ports;
pub mod services;

pub use collections::{Collection, CollectionBuilder, CollectionItem};
pub use logging::ProfilingLogger;
pub use mapping::{MappingConfiguration, MappingEngine};
pub use plugins::PluginManager;
pub use services::ServiceContext;
