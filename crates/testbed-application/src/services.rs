//! Service layer
//!
//! The services handed to a test when the application graph is wired. The
//! services themselves are thin: what matters to the lifecycle is which
//! capabilities they were composed from.

use crate::collections::{MapperCollection, PropertyEditorCollection, UrlSegmentProviderCollection};
use crate::logging::ProfilingLogger;
use std::sync::Arc;
use testbed_domain::ports::{AppCaches, PublishedModelFactory};
use testbed_domain::value_objects::{MapperDescriptor, PropertyEditorDescriptor, Settings};

/// Capabilities the service layer is composed from
pub struct ServiceDependencies {
    /// Settings snapshot taken at composition time
    pub settings: Arc<Settings>,
    /// Caching facility
    pub caches: Arc<AppCaches>,
    /// Profiling logger
    pub logger: Arc<ProfilingLogger>,
    /// Content model factory
    pub model_factory: Arc<dyn PublishedModelFactory>,
    /// URL segment providers
    pub url_segments: Arc<UrlSegmentProviderCollection>,
    /// Property editors
    pub property_editors: Arc<PropertyEditorCollection>,
    /// Persistence mappers
    pub mappers: Arc<MapperCollection>,
}

/// Service layer entry point
pub struct ServiceContext {
    deps: ServiceDependencies,
}

impl ServiceContext {
    /// Compose the service layer
    pub fn new(deps: ServiceDependencies) -> Self {
        Self { deps }
    }

    /// Settings snapshot
    pub fn settings(&self) -> Arc<Settings> {
        Arc::clone(&self.deps.settings)
    }

    /// Caching facility
    pub fn caches(&self) -> Arc<AppCaches> {
        Arc::clone(&self.deps.caches)
    }

    /// Profiling logger
    pub fn logger(&self) -> Arc<ProfilingLogger> {
        Arc::clone(&self.deps.logger)
    }

    /// Content model factory
    pub fn model_factory(&self) -> Arc<dyn PublishedModelFactory> {
        Arc::clone(&self.deps.model_factory)
    }

    /// URL segment for `name`; empty when no provider produced one
    pub fn url_segment(&self, name: &str) -> String {
        self.deps.url_segments.url_segment(name).unwrap_or_default()
    }

    /// Property editor by alias
    pub fn property_editor(&self, alias: &str) -> Option<&PropertyEditorDescriptor> {
        self.deps.property_editors.get(alias)
    }

    /// Number of property editors
    pub fn property_editor_count(&self) -> usize {
        self.deps.property_editors.len()
    }

    /// Mapper for an entity
    pub fn mapper_for(&self, entity: &str) -> Option<&MapperDescriptor> {
        self.deps.mappers.get(entity)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("application", &self.deps.settings.application_name)
            .field("property_editors", &self.deps.property_editors.len())
            .field("url_segment_providers", &self.deps.url_segments.len())
            .field("mappers", &self.deps.mappers.len())
            .finish_non_exhaustive()
    }
}
