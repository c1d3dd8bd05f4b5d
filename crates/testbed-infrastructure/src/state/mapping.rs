//! Global mapping engine
//!
//! Installed by the mapping activation step when a test enables mapping and
//! uninstalled by every reset.

use std::sync::{Arc, PoisonError, RwLock};
use testbed_application::MappingEngine;
use testbed_domain::error::{Error, Result};

static ENGINE: RwLock<Option<Arc<MappingEngine>>> = RwLock::new(None);

/// Install `engine` as the process-wide engine
pub fn install(engine: Arc<MappingEngine>) {
    *ENGINE.write().unwrap_or_else(PoisonError::into_inner) = Some(engine);
}

/// The installed engine
pub fn engine() -> Result<Arc<MappingEngine>> {
    ENGINE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or_else(|| Error::mapping("mapping engine is not activated"))
}

/// Whether an engine is installed
pub fn is_initialized() -> bool {
    ENGINE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Uninstall the engine
pub fn reset() {
    *ENGINE.write().unwrap_or_else(PoisonError::into_inner) = None;
}
