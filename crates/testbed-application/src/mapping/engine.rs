//! Mapping configuration and engine

use crate::ports::MappingProfile;
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use testbed_domain::error::{Error, Result};

type MapFn = Box<dyn Fn(&dyn Any, &MappingEngine) -> Result<Box<dyn Any + Send>> + Send + Sync>;

struct MapDefinition {
    source: &'static str,
    destination: &'static str,
    profile: String,
    map: MapFn,
}

/// Rules collected from mapping profiles before the engine is built
#[derive(Default)]
pub struct MappingConfiguration {
    maps: HashMap<(TypeId, TypeId), MapDefinition>,
    current_profile: String,
    profiles: Vec<String>,
    conflicts: Vec<String>,
}

impl MappingConfiguration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every rule of `profile`
    pub fn add_profile(&mut self, profile: &dyn MappingProfile) -> &mut Self {
        self.current_profile = profile.profile_name().to_string();
        self.profiles.push(self.current_profile.clone());
        profile.configure(self);
        self
    }

    /// Define how `S` maps into `D`
    ///
    /// The closure receives the engine so nested shapes can be mapped with
    /// the same rules. Defining the same pair twice is recorded as a
    /// conflict and reported by [`MappingConfiguration::build`].
    pub fn define<S, D, F>(&mut self, map: F) -> &mut Self
    where
        S: 'static,
        D: Send + 'static,
        F: Fn(&S, &MappingEngine) -> Result<D> + Send + Sync + 'static,
    {
        let key = (TypeId::of::<S>(), TypeId::of::<D>());
        if let Some(existing) = self.maps.get(&key) {
            self.conflicts.push(format!(
                "{} -> {} defined by both '{}' and '{}'",
                existing.source, existing.destination, existing.profile, self.current_profile
            ));
            return self;
        }

        let definition = MapDefinition {
            source: type_name::<S>(),
            destination: type_name::<D>(),
            profile: self.current_profile.clone(),
            map: Box::new(move |source, engine| {
                let source = source.downcast_ref::<S>().ok_or_else(|| {
                    Error::mapping(format!("source is not a {}", type_name::<S>()))
                })?;
                Ok(Box::new(map(source, engine)?) as Box<dyn Any + Send>)
            }),
        };
        self.maps.insert(key, definition);
        self
    }

    /// Number of defined maps
    pub fn map_count(&self) -> usize {
        self.maps.len()
    }

    /// Freeze the configuration into an engine
    pub fn build(self) -> Result<MappingEngine> {
        if !self.conflicts.is_empty() {
            return Err(Error::mapping(format!(
                "conflicting map definitions: {}",
                self.conflicts.join("; ")
            )));
        }
        Ok(MappingEngine {
            maps: self.maps,
            profiles: self.profiles,
        })
    }
}

/// Immutable set of maps
pub struct MappingEngine {
    maps: HashMap<(TypeId, TypeId), MapDefinition>,
    profiles: Vec<String>,
}

impl MappingEngine {
    /// Build an engine from a set of profiles
    pub fn from_profiles<'a, I>(profiles: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a dyn MappingProfile>,
    {
        let mut config = MappingConfiguration::new();
        for profile in profiles {
            config.add_profile(profile);
        }
        config.build()
    }

    /// Map `source` into a new `D`
    pub fn map<S: 'static, D: 'static>(&self, source: &S) -> Result<D> {
        let definition = self
            .maps
            .get(&(TypeId::of::<S>(), TypeId::of::<D>()))
            .ok_or_else(|| {
                Error::mapping(format!(
                    "no map defined from {} to {}",
                    type_name::<S>(),
                    type_name::<D>()
                ))
            })?;

        let mapped = (definition.map)(source, self)?;
        mapped.downcast::<D>().map(|boxed| *boxed).map_err(|_| {
            Error::mapping(format!(
                "map from {} produced something other than {}",
                definition.source, definition.destination
            ))
        })
    }

    /// Map every element of `sources`
    pub fn map_all<S: 'static, D: 'static>(&self, sources: &[S]) -> Result<Vec<D>> {
        sources.iter().map(|source| self.map(source)).collect()
    }

    /// Whether a map from `S` to `D` exists
    pub fn has_map<S: 'static, D: 'static>(&self) -> bool {
        self.maps
            .contains_key(&(TypeId::of::<S>(), TypeId::of::<D>()))
    }

    /// Names of the profiles the engine was built from
    pub fn profile_names(&self) -> &[String] {
        &self.profiles
    }

    /// Number of maps
    pub fn map_count(&self) -> usize {
        self.maps.len()
    }
}

impl std::fmt::Debug for MappingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingEngine")
            .field("profiles", &self.profiles)
            .field("maps", &self.maps.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Celsius(f64);
    struct Fahrenheit(f64);

    struct TemperatureProfile;

    impl MappingProfile for TemperatureProfile {
        fn profile_name(&self) -> &str {
            "temperature"
        }

        fn configure(&self, config: &mut MappingConfiguration) {
            config.define(|c: &Celsius, _| Ok(Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)));
        }
    }

    #[test]
    fn test_map_defined_pair() {
        let engine = MappingEngine::from_profiles([&TemperatureProfile as &dyn MappingProfile])
            .expect("engine should build");

        let f: Fahrenheit = engine.map(&Celsius(100.0)).expect("map should succeed");
        assert!((f.0 - 212.0).abs() < f64::EPSILON);
        assert!(engine.has_map::<Celsius, Fahrenheit>());
        assert!(!engine.has_map::<Fahrenheit, Celsius>());
    }

    #[test]
    fn test_missing_map_fails() {
        let engine = MappingConfiguration::new().build().expect("empty engine builds");
        let result: Result<Fahrenheit> = engine.map(&Celsius(1.0));
        assert!(matches!(result, Err(Error::Mapping { .. })));
    }

    #[test]
    fn test_duplicate_definition_is_a_conflict() {
        let profiles: [&dyn MappingProfile; 2] = [&TemperatureProfile, &TemperatureProfile];
        let err = MappingEngine::from_profiles(profiles).expect_err("duplicate should fail");
        assert!(err.to_string().contains("temperature"));
    }
}
