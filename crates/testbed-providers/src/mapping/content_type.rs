//! Content type display mapping

use testbed_application::ports::MappingProfile;
use testbed_application::{MappingConfiguration, MappingEngine};
use testbed_domain::value_objects::{
    ContentType, ContentTypeDisplay, PropertyType, PropertyTypeDisplay,
};

/// Icon used when a content type has none
pub const DEFAULT_CONTENT_TYPE_ICON: &str = "icon-document";

/// Maps content types and their properties into display shapes
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTypeProfile;

impl MappingProfile for ContentTypeProfile {
    fn profile_name(&self) -> &str {
        "content_type"
    }

    fn configure(&self, config: &mut MappingConfiguration) {
        config.define(|source: &PropertyType, _| {
            let label = if source.mandatory {
                format!("{} *", source.name)
            } else {
                source.name.clone()
            };
            Ok(PropertyTypeDisplay {
                alias: source.alias.clone(),
                label,
                editor: source.editor_alias.clone(),
            })
        });

        config.define(|source: &ContentType, engine: &MappingEngine| {
            Ok(ContentTypeDisplay {
                alias: source.alias.clone(),
                name: source.name.clone(),
                icon: source
                    .icon
                    .clone()
                    .filter(|icon| !icon.is_empty())
                    .unwrap_or_else(|| DEFAULT_CONTENT_TYPE_ICON.to_string()),
                properties: engine
                    .map_all::<PropertyType, PropertyTypeDisplay>(&source.property_types)?,
            })
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_maps_nested_properties() {
        let engine = MappingEngine::from_profiles([&ContentTypeProfile as &dyn MappingProfile])
            .expect("engine");
        let source = ContentType {
            alias: "article".to_string(),
            name: "Article".to_string(),
            icon: None,
            property_types: vec![PropertyType {
                alias: "title".to_string(),
                name: "Title".to_string(),
                editor_alias: "Testbed.TextBox".to_string(),
                mandatory: true,
            }],
        };

        let display: ContentTypeDisplay = engine.map(&source).expect("map");

        assert_eq!(display.icon, DEFAULT_CONTENT_TYPE_ICON);
        assert_eq!(display.properties.len(), 1);
        assert_eq!(display.properties[0].label, "Title *");
    }
}
