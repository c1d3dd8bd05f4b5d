//! Default URL segment provider

use testbed_domain::ports::UrlSegmentProvider;

/// Lowercases a name and joins its alphanumeric runs with `-`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUrlSegmentProvider;

impl DefaultUrlSegmentProvider {
    /// Create the provider
    pub fn new() -> Self {
        Self
    }
}

impl UrlSegmentProvider for DefaultUrlSegmentProvider {
    fn url_segment(&self, name: &str) -> Option<String> {
        let segment = name
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        (!segment.is_empty()).then_some(segment)
    }

    fn provider_name(&self) -> &str {
        "default"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_segment() {
        let provider = DefaultUrlSegmentProvider;
        assert_eq!(provider.url_segment("Hello World!").as_deref(), Some("hello-world"));
        assert_eq!(provider.url_segment("  --  "), None);
    }
}
