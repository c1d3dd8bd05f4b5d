//! Container lifecycle
//!
//! Owns the single live container slot. A container is live from
//! [`ContainerLifecycle::create`] until [`ContainerLifecycle::dispose`];
//! creating a second one while the first is live is a setup error.

use super::container::Container;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use testbed_domain::error::{Error, Result};
use tracing::info;

static LIVE: Mutex<Option<Arc<Container>>> = Mutex::new(None);

fn live_slot() -> MutexGuard<'static, Option<Arc<Container>>> {
    LIVE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Creation and disposal of the live container
pub struct ContainerLifecycle;

impl ContainerLifecycle {
    /// Create a new empty container and make it the live one
    pub fn create() -> Result<Arc<Container>> {
        let mut slot = live_slot();
        if let Some(existing) = slot.as_ref().filter(|c| !c.is_disposed()) {
            return Err(Error::ContainerAlreadyLive {
                id: existing.id().to_string(),
            });
        }

        let container = Arc::new(Container::new());
        *slot = Some(Arc::clone(&container));
        info!(container = %container.id(), "Created container");
        Ok(container)
    }

    /// Dispose the live container, if any, and clear the slot
    ///
    /// Returns whether a container was disposed. The slot is cleared even
    /// when releasing a resource fails.
    pub fn dispose() -> Result<bool> {
        let taken = live_slot().take();
        match taken {
            Some(container) if !container.is_disposed() => {
                let id = container.id();
                container.dispose()?;
                info!(container = %id, "Disposed live container");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// The live container
    pub fn live() -> Option<Arc<Container>> {
        live_slot()
            .as_ref()
            .filter(|c| !c.is_disposed())
            .map(Arc::clone)
    }

    /// Whether a container is live
    pub fn is_live() -> bool {
        Self::live().is_some()
    }
}
