//! Mapping-rule provider port

use crate::mapping::MappingConfiguration;

/// A set of mapping rules contributed to the global mapping engine
///
/// Profiles are registered as a collection in the test container and
/// applied together when mapping is activated.
pub trait MappingProfile: Send + Sync {
    /// Profile name, reported when two profiles define the same map
    fn profile_name(&self) -> &str;

    /// Add this profile's maps to `config`
    fn configure(&self, config: &mut MappingConfiguration);
}
