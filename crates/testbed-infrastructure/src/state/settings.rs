//! Default settings
//!
//! The settings components read when nothing more specific is configured.
//! Tests may adjust them; every reset restores the defaults.

use std::sync::{Arc, PoisonError, RwLock};
use testbed_domain::value_objects::Settings;

static SETTINGS: RwLock<Option<Arc<Settings>>> = RwLock::new(None);

/// Current settings
pub fn current() -> Arc<Settings> {
    SETTINGS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_default()
}

/// Modify the current settings
pub fn update(change: impl FnOnce(&mut Settings)) {
    let mut settings = (*current()).clone();
    change(&mut settings);
    *SETTINGS.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(settings));
}

/// Whether the settings equal the defaults
pub fn is_default() -> bool {
    *current() == Settings::default()
}

/// Restore the defaults
pub fn reset() {
    *SETTINGS.write().unwrap_or_else(PoisonError::into_inner) = None;
}
