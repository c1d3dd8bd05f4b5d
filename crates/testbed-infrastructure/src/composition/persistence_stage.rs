//! Persistence stage

use super::stage::{CompositionContext, CompositionStage};
use crate::config::DatabaseMode;
use crate::constants::DATABASE_FILE_NAME;
use crate::di::Container;
use std::sync::Arc;
use testbed_domain::error::Result;
use testbed_domain::ports::DatabaseFactory;
use testbed_providers::persistence::{FileDatabaseFactory, default_schema};

/// Creates the per-test database and registers its factory
pub struct PersistenceStage;

impl CompositionStage for PersistenceStage {
    fn name(&self) -> &'static str {
        "persistence"
    }

    fn compose(&self, container: &Container, context: &CompositionContext<'_>) -> Result<()> {
        let path = context.paths.data.join(DATABASE_FILE_NAME);
        let database = match context.options.database {
            DatabaseMode::None => {
                return container
                    .register_disabled::<dyn DatabaseFactory>("database = none for this test");
            }
            DatabaseMode::NewSchema => FileDatabaseFactory::create_with_schema(&path, &default_schema())?,
            DatabaseMode::NewEmpty => FileDatabaseFactory::create_empty(&path)?,
        };

        let database = Arc::new(database);
        container.track_disposable(database.clone())?;
        container.register_instance::<dyn DatabaseFactory>(database)
    }
}
