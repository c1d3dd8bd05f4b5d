//! Ambient container accessor
//!
//! Collaborators that cannot receive the container explicitly read it from
//! here. Published at the end of set-up, cleared first thing on reset.

use crate::di::Container;
use std::sync::{Arc, PoisonError, RwLock};

static CURRENT: RwLock<Option<Arc<Container>>> = RwLock::new(None);

/// Publish `container` as the ambient container
pub fn set(container: Arc<Container>) {
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = Some(container);
}

/// The ambient container, if one is published
pub fn container() -> Option<Arc<Container>> {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Whether a container is published
pub fn is_initialized() -> bool {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Clear the accessor
pub fn reset() {
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = None;
}
