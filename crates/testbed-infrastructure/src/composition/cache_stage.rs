//! Cache stage
//!
//! Caching is always disabled in tests.

use super::stage::{CompositionContext, CompositionStage};
use crate::di::{CapabilityKey, Container};
use std::sync::Arc;
use testbed_application::ProfilingLogger;
use testbed_domain::error::Result;
use testbed_domain::ports::{AppCaches, RuntimeCache};
use testbed_providers::cache::disabled_app_caches;

/// Registers the disabled caching facility
pub struct CacheStage;

impl CompositionStage for CacheStage {
    fn name(&self) -> &'static str {
        "cache"
    }

    fn requires(&self) -> Vec<CapabilityKey> {
        vec![CapabilityKey::of::<ProfilingLogger>()]
    }

    fn compose(&self, container: &Container, _context: &CompositionContext<'_>) -> Result<()> {
        let caches = Arc::new(disabled_app_caches());
        container.register_instance::<dyn RuntimeCache>(caches.runtime())?;
        container.register_instance::<AppCaches>(caches)
    }
}
