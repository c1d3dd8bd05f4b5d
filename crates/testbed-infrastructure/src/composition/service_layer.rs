//! Service layer composition root
//!
//! How the service layer wires itself when nothing overrides it: empty
//! mapper and URL segment builders, collections built from whatever builder
//! is registered at resolution time, and the service context over all of
//! it. The application stage applies this root first and then replaces the
//! two builder defaults.

use crate::di::Container;
use std::sync::Arc;
use testbed_application::collections::{
    MapperCollection, MapperCollectionBuilder, PropertyEditorCollection,
    PropertyEditorCollectionBuilder, UrlSegmentProviderCollection,
    UrlSegmentProviderCollectionBuilder,
};
use testbed_application::services::ServiceDependencies;
use testbed_application::{ProfilingLogger, ServiceContext};
use testbed_domain::error::Result;
use testbed_domain::ports::{AppCaches, PublishedModelFactory};
use testbed_domain::value_objects::Settings;

/// Register the service layer's own defaults
pub fn compose(container: &Container) -> Result<()> {
    container.register_instance(Arc::new(MapperCollectionBuilder::new()))?;
    container.register_instance(Arc::new(UrlSegmentProviderCollectionBuilder::new()))?;

    container.register_lazy::<MapperCollection, _>(|c| {
        Ok(Arc::new(c.resolve::<MapperCollectionBuilder>()?.build()))
    })?;
    container.register_lazy::<UrlSegmentProviderCollection, _>(|c| {
        Ok(Arc::new(c.resolve::<UrlSegmentProviderCollectionBuilder>()?.build()))
    })?;
    container.register_lazy::<PropertyEditorCollection, _>(|c| {
        Ok(Arc::new(c.resolve::<PropertyEditorCollectionBuilder>()?.build()))
    })?;

    container.register_lazy::<ServiceContext, _>(|c| {
        Ok(Arc::new(ServiceContext::new(ServiceDependencies {
            settings: c.resolve::<Settings>()?,
            caches: c.resolve::<AppCaches>()?,
            logger: c.resolve::<ProfilingLogger>()?,
            model_factory: c.resolve::<dyn PublishedModelFactory>()?,
            url_segments: c.resolve::<UrlSegmentProviderCollection>()?,
            property_editors: c.resolve::<PropertyEditorCollection>()?,
            mappers: c.resolve::<MapperCollection>()?,
        })))
    })
}
