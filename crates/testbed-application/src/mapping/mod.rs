//! Object mapping
//!
//! Mapping-rule providers ([`crate::ports::MappingProfile`]) describe how one
//! shape converts into another. Their rules are gathered into a
//! [`MappingConfiguration`] and frozen into a [`MappingEngine`], which the
//! infrastructure layer installs as the process-wide engine.

pub mod engine;

pub use engine::{MappingConfiguration, MappingEngine};
