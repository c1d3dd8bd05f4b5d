//! Content ports

use serde_json::Value;

/// Builds strongly-typed content models for a content type
///
/// Tests register a no-op factory; models are never generated.
pub trait PublishedModelFactory: Send + Sync {
    /// Create a model for `content_type_alias`, or `None` when no model exists
    fn create_model(&self, content_type_alias: &str, properties: &Value) -> Option<Value>;

    /// Whether the factory generates models at all
    fn is_enabled(&self) -> bool;
}

/// Produces the URL segment for a piece of content
pub trait UrlSegmentProvider: Send + Sync {
    /// Segment for `name`, or `None` to defer to the next provider
    fn url_segment(&self, name: &str) -> Option<String>;

    /// Provider name, used as collection key
    fn provider_name(&self) -> &str;
}
