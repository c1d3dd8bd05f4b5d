//! Plugin Manager
//!
//! Holds the result of one scan of the discoverable type registry. A scan is
//! expensive relative to a test, so the infrastructure layer keeps one
//! manager for the whole session and hands the same `Arc` to every container.

use crate::ports::registry::{PluginTypeEntry, scan_plugin_types};
use std::time::{Duration, Instant};
use testbed_domain::value_objects::PluginKind;
use tracing::debug;
use uuid::Uuid;

/// Result of scanning the fixed set of code units
#[derive(Debug)]
pub struct PluginManager {
    scan_id: Uuid,
    scan_targets: Vec<String>,
    types: Vec<&'static PluginTypeEntry>,
    scan_duration: Duration,
}

impl PluginManager {
    /// Scan the registry for types declared in `targets`
    pub fn scan(targets: &[String]) -> Self {
        let started = Instant::now();
        let types = scan_plugin_types(targets);
        let scan_duration = started.elapsed();
        let scan_id = Uuid::new_v4();

        debug!(
            scan_id = %scan_id,
            targets = ?targets,
            types = types.len(),
            elapsed_us = scan_duration.as_micros(),
            "Scanned discoverable types"
        );

        Self {
            scan_id,
            scan_targets: targets.to_vec(),
            types,
            scan_duration,
        }
    }

    /// Unique id of this scan
    pub fn scan_id(&self) -> Uuid {
        self.scan_id
    }

    /// Code units that were scanned
    pub fn scan_targets(&self) -> &[String] {
        &self.scan_targets
    }

    /// Every discovered type
    pub fn types(&self) -> &[&'static PluginTypeEntry] {
        &self.types
    }

    /// Discovered types of one kind
    pub fn types_of_kind(&self, kind: PluginKind) -> Vec<&'static PluginTypeEntry> {
        self.types
            .iter()
            .copied()
            .filter(|entry| entry.kind == kind)
            .collect()
    }

    /// Look up a discovered type by name
    pub fn find(&self, name: &str) -> Option<&'static PluginTypeEntry> {
        self.types.iter().copied().find(|entry| entry.name == name)
    }

    /// Number of discovered types
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// How long the scan took
    pub fn scan_duration(&self) -> Duration {
        self.scan_duration
    }

    /// `(legacy id, name)` pairs of discovered types that carry a legacy id
    pub fn legacy_kinds(&self) -> Vec<(i32, &'static str)> {
        self.types
            .iter()
            .filter_map(|entry| entry.legacy_id.map(|id| (id, entry.name)))
            .collect()
    }

    /// Whether this scan covered exactly `targets`, ignoring order
    pub fn covers(&self, targets: &[String]) -> bool {
        self.scan_targets.len() == targets.len()
            && targets.iter().all(|t| self.scan_targets.contains(t))
    }
}
