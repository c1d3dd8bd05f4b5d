//! Plugin discovery cache
//!
//! Scanning for discoverable types is the most expensive part of composing
//! a container, so one scan is kept for the whole process and every
//! container shares the same [`PluginManager`]. Resets leave it alone; only
//! a test asking for a forced rescan (or a change of scan targets) replaces
//! it.

use std::sync::{Arc, Mutex, PoisonError};
use testbed_application::PluginManager;
use tracing::info;

static CACHE: Mutex<Option<Arc<PluginManager>>> = Mutex::new(None);

/// How the plugin manager handed out was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    /// The cached scan was reused
    Reused,
    /// Nothing usable was cached; a scan ran
    Scanned,
    /// A cached scan was discarded on request
    Rescanned,
}

/// Process-wide cached scan
pub struct PluginDiscoveryCache;

impl PluginDiscoveryCache {
    /// Cached manager for `targets`, scanning when needed
    pub fn get_or_scan(targets: &[String], force_rescan: bool) -> (Arc<PluginManager>, DiscoveryOutcome) {
        let mut cache = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

        let outcome = match cache.as_ref() {
            Some(cached) if !force_rescan && cached.covers(targets) => {
                return (Arc::clone(cached), DiscoveryOutcome::Reused);
            }
            Some(_) if force_rescan => DiscoveryOutcome::Rescanned,
            _ => DiscoveryOutcome::Scanned,
        };

        let manager = Arc::new(PluginManager::scan(targets));
        info!(
            scan_id = %manager.scan_id(),
            types = manager.type_count(),
            ?outcome,
            "Plugin discovery cache refreshed"
        );
        *cache = Some(Arc::clone(&manager));
        (manager, outcome)
    }

    /// The cached manager, if any
    pub fn cached() -> Option<Arc<PluginManager>> {
        CACHE.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Drop the cached manager
    pub fn invalidate() {
        CACHE.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}
