//! Application stage
//!
//! Wires the application graph: file system roles, a settings snapshot,
//! the content model factory, collection builders and the service layer.

use super::service_layer;
use super::stage::{CompositionContext, CompositionStage};
use crate::di::{CapabilityKey, Container};
use crate::state::{settings, virtual_path};
use std::sync::Arc;
use testbed_application::collections::{
    MapperCollectionBuilder, UrlSegmentProviderCollectionBuilder, property_editors_from,
};
use testbed_application::{PluginManager, ProfilingLogger, ServiceContext};
use testbed_domain::constants::{FS_MEDIA, PHYSICAL_FILE_SYSTEM_ROLES};
use testbed_domain::error::{Error, Result};
use testbed_domain::ports::{AppCaches, FileSystem, PublishedModelFactory, UrlSegmentProvider};
use testbed_domain::value_objects::Settings;
use testbed_providers::content::{DefaultUrlSegmentProvider, NoopPublishedModelFactory, core_mappers};
use testbed_providers::filesystem::{NullFileSystem, PhysicalFileSystem};

/// Registers the application graph, or a disabled service context
pub struct ApplicationStage;

impl CompositionStage for ApplicationStage {
    fn name(&self) -> &'static str {
        "application"
    }

    fn requires(&self) -> Vec<CapabilityKey> {
        vec![
            CapabilityKey::of::<ProfilingLogger>(),
            CapabilityKey::of::<AppCaches>(),
            CapabilityKey::of::<PluginManager>(),
        ]
    }

    fn compose(&self, container: &Container, context: &CompositionContext<'_>) -> Result<()> {
        if !context.options.application {
            return container
                .register_disabled::<ServiceContext>("the application graph is not wired for this test");
        }

        let settings = settings::current();

        container.register_named_instance::<dyn FileSystem>(FS_MEDIA, Arc::new(NullFileSystem))?;
        for role in PHYSICAL_FILE_SYSTEM_ROLES {
            let virtual_root = settings.path_for_role(role).ok_or_else(|| {
                Error::internal(format!("no configured path for file system role '{role}'"))
            })?;
            container.register_named_instance::<dyn FileSystem>(
                role,
                Arc::new(PhysicalFileSystem::new(virtual_path::map(virtual_root))),
            )?;
        }

        container.register_instance::<Settings>(settings)?;
        container.register_instance::<dyn PublishedModelFactory>(Arc::new(NoopPublishedModelFactory))?;

        let plugins = container.resolve::<PluginManager>()?;
        container.register_instance(Arc::new(property_editors_from(&plugins)))?;

        service_layer::compose(container)?;

        container.replace_instance(
            Arc::new(MapperCollectionBuilder::new().append_all(core_mappers())),
            "core persistence mappers replace the service layer default",
        )?;
        let default_segments: Arc<dyn UrlSegmentProvider> = Arc::new(DefaultUrlSegmentProvider);
        container.replace_instance(
            Arc::new(UrlSegmentProviderCollectionBuilder::new().append(default_segments)),
            "default URL segment provider replaces the service layer default",
        )
    }
}
