//! Cache Port
//!
//! Caching is disabled in tests to avoid one test reading values another
//! test cached. The port still exists so components that depend on a cache
//! can be composed unchanged.

use serde_json::Value;
use std::sync::Arc;

/// Runtime cache view
pub trait RuntimeCache: Send + Sync {
    /// Get a cached item
    fn get(&self, key: &str) -> Option<Value>;

    /// Insert an item, replacing any previous value
    fn insert(&self, key: &str, value: Value);

    /// Remove every item
    fn clear(&self);

    /// Whether inserted values can ever be read back
    fn is_enabled(&self) -> bool;

    /// Implementation name for diagnostics
    fn cache_name(&self) -> &str;
}

/// The caching facility: a runtime cache plus a request-scoped cache
#[derive(Clone)]
pub struct AppCaches {
    runtime: Arc<dyn RuntimeCache>,
    request: Arc<dyn RuntimeCache>,
}

impl AppCaches {
    /// Create the facility from its two views
    pub fn new(runtime: Arc<dyn RuntimeCache>, request: Arc<dyn RuntimeCache>) -> Self {
        Self { runtime, request }
    }

    /// Runtime cache view
    pub fn runtime(&self) -> Arc<dyn RuntimeCache> {
        Arc::clone(&self.runtime)
    }

    /// Request-scoped cache view
    pub fn request(&self) -> Arc<dyn RuntimeCache> {
        Arc::clone(&self.request)
    }

    /// True when neither view keeps values
    pub fn is_disabled(&self) -> bool {
        !self.runtime.is_enabled() && !self.request.is_enabled()
    }
}

impl std::fmt::Debug for AppCaches {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCaches")
            .field("runtime", &self.runtime.cache_name())
            .field("request", &self.request.cache_name())
            .finish()
    }
}
