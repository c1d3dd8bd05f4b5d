//! Composition stage contract

use crate::config::{HarnessConfig, TestOptions};
use crate::di::{CapabilityKey, Container};
use crate::harness::TestPaths;
use testbed_domain::error::Result;

/// What a stage may read while registering
#[derive(Debug, Clone, Copy)]
pub struct CompositionContext<'a> {
    /// Effective options of the test
    pub options: &'a TestOptions,
    /// Fixture working directories
    pub paths: &'a TestPaths,
    /// Harness configuration
    pub config: &'a HarnessConfig,
}

/// One ordered registration step
pub trait CompositionStage: Send + Sync {
    /// Stage name, used in errors and logs
    fn name(&self) -> &'static str;

    /// Capabilities earlier stages must have registered
    fn requires(&self) -> Vec<CapabilityKey> {
        Vec::new()
    }

    /// Register this stage's capabilities
    fn compose(&self, container: &Container, context: &CompositionContext<'_>) -> Result<()>;
}
