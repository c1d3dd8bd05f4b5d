//! Built-in persistence mappers

use testbed_domain::value_objects::MapperDescriptor;

const CORE_MAPPERS: [(&str, &str); 5] = [
    ("content", "nodes"),
    ("content_type", "content_types"),
    ("property_type", "property_types"),
    ("user", "users"),
    ("key_value", "key_value"),
];

/// Mappers appended to the mapper collection when the application graph is wired
pub fn core_mappers() -> Vec<MapperDescriptor> {
    CORE_MAPPERS
        .iter()
        .map(|(entity, table)| MapperDescriptor {
            entity: (*entity).to_string(),
            table: (*table).to_string(),
        })
        .collect()
}
