//! Disabled cache
//!
//! Accepts writes and never returns them. Both views of the caching facility
//! are backed by this provider in every test container.

use serde_json::Value;
use std::sync::Arc;
use testbed_domain::ports::{AppCaches, RuntimeCache};

/// Cache that keeps nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAppCache;

impl NoAppCache {
    /// Create a new disabled cache
    pub fn new() -> Self {
        Self
    }
}

impl RuntimeCache for NoAppCache {
    fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    fn insert(&self, _key: &str, _value: Value) {}

    fn clear(&self) {}

    fn is_enabled(&self) -> bool {
        false
    }

    fn cache_name(&self) -> &str {
        "no_app_cache"
    }
}

/// Caching facility with both views disabled
pub fn disabled_app_caches() -> AppCaches {
    let cache: Arc<dyn RuntimeCache> = Arc::new(NoAppCache::new());
    AppCaches::new(Arc::clone(&cache), cache)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserted_values_are_never_returned() {
        let caches = disabled_app_caches();
        caches.runtime().insert("key", Value::from(42));
        caches.request().insert("key", Value::from(42));

        assert!(caches.runtime().get("key").is_none());
        assert!(caches.request().get("key").is_none());
        assert!(caches.is_disabled());
    }
}
