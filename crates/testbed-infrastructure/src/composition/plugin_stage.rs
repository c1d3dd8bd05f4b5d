//! Plugin discovery stage

use super::stage::{CompositionContext, CompositionStage};
use crate::di::Container;
use crate::state::PluginDiscoveryCache;
use testbed_domain::error::Result;
use testbed_providers::content::plugin_types;
use tracing::debug;

/// Registers the plugin manager from the process-wide discovery cache
pub struct PluginStage;

impl CompositionStage for PluginStage {
    fn name(&self) -> &'static str {
        "plugins"
    }

    fn compose(&self, container: &Container, context: &CompositionContext<'_>) -> Result<()> {
        let (manager, outcome) = PluginDiscoveryCache::get_or_scan(
            &context.config.plugins.scan_targets,
            context.options.force_plugin_rescan,
        );
        // Referencing the provider registrations keeps them linked into every binary
        debug!(
            scan_id = %manager.scan_id(),
            ?outcome,
            discovered = manager.type_count(),
            provided = plugin_types::declared_type_names().len(),
            "Registered plugin manager"
        );
        container.register_instance(manager)
    }
}
