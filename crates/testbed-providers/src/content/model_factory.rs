//! Published model factory stand-in

use serde_json::Value;
use testbed_domain::ports::PublishedModelFactory;

/// Factory that never generates models
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPublishedModelFactory;

impl NoopPublishedModelFactory {
    /// Create a new no-op factory
    pub fn new() -> Self {
        Self
    }
}

impl PublishedModelFactory for NoopPublishedModelFactory {
    fn create_model(&self, _content_type_alias: &str, _properties: &Value) -> Option<Value> {
        None
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
