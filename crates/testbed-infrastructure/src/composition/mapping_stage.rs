//! Mapping stage

use super::stage::{CompositionContext, CompositionStage};
use crate::di::Container;
use crate::state;
use testbed_application::MappingEngine;
use testbed_application::ports::MappingProfile;
use testbed_domain::error::Result;
use testbed_providers::mapping::default_mapping_profiles;

const DISABLED_REASON: &str = "mapping is disabled for this test";

/// Registers mapping profiles and the engine accessor, or disabled markers
pub struct MappingStage;

impl CompositionStage for MappingStage {
    fn name(&self) -> &'static str {
        "mapping"
    }

    fn compose(&self, container: &Container, context: &CompositionContext<'_>) -> Result<()> {
        if !context.options.mapping {
            container.register_disabled::<dyn MappingProfile>(DISABLED_REASON)?;
            return container.register_disabled::<MappingEngine>(DISABLED_REASON);
        }

        for profile in default_mapping_profiles() {
            container.add_to_collection::<dyn MappingProfile>(profile)?;
        }
        // The engine is built during initialization; resolve the installed one
        container.register_factory::<MappingEngine, _>(|_| state::mapping::engine())
    }
}
