//! Test Harness
//!
//! Lifecycle entry points for a fixture (a group of tests sharing options
//! and hooks). A test runner calls [`TestHarness::set_up`] before each test
//! and [`TestHarness::tear_down`] after it.
//!
//! ```text
//! set_up(method)                         tear_down()
//!   reset (leftovers)                      hooks.tear_down
//!   resolve options                        reset (disposes container)
//!   create container                       environment cleanup
//!   set virtual path base                  flip session / fixture flags
//!   composition pipeline
//!   hooks.compose
//!   initialization pipeline
//!   seal, publish ambient container
//!   hooks.set_up
//! ```
//!
//! Fixture hooks always run after the base set-up and before the base
//! tear-down.
//!
//! A harness takes a ready [`HarnessConfig`]; build one with
//! [`ConfigLoader`] or use [`TestHarness::from_default_config`] to read
//! `testbed.toml` and `TESTBED__*` variables.
//!
//! A test is recorded as soon as its options are resolved. If set-up fails
//! part-way, what it already created on disk is still removed by the next
//! tear-down (or the next set-up).

use crate::composition::{CompositionContext, CompositionPipeline};
use crate::config::{
    ConfigLoader, HarnessConfig, OptionsCatalog, OptionsSource, TestIdentity, TestOptions, resolve_options,
};
use crate::constants::{CONFIG_DIR, DATA_DIR, FIXTURES_DIR, LOGS_DIR};
use crate::di::{Container, ContainerLifecycle};
use crate::initialization::{InitializationPipeline, InitializationReport};
use crate::logging::init_logging;
use crate::reset::{CleanupReport, ResetManager, ResetReport};
use crate::session;
use crate::state::{current, virtual_path};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use testbed_domain::error::{Error, Result};
use tracing::{info, warn};

// ============================================================================
// Paths
// ============================================================================

/// Working directories of one fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPaths {
    /// Fixture root; also the virtual path base during a test
    pub root: PathBuf,
    /// Real logger output
    pub logs: PathBuf,
    /// Database files
    pub data: PathBuf,
    /// Settings files
    pub config: PathBuf,
}

impl TestPaths {
    /// Paths for `fixture` under `working_directory`
    pub fn for_fixture(working_directory: &Path, fixture: &str) -> Self {
        let dir_name: String = fixture
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        let root = working_directory.join(FIXTURES_DIR).join(dir_name);
        Self {
            logs: root.join(LOGS_DIR),
            data: root.join(DATA_DIR),
            config: root.join(CONFIG_DIR),
            root,
        }
    }
}

// ============================================================================
// Fixture hooks
// ============================================================================

/// Fixture-specific additions to the base lifecycle
pub trait FixtureHooks {
    /// Register extra capabilities after the base stages, before initialization
    fn compose(&mut self, _container: &Container, _context: &CompositionContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Runs after the base set-up completed
    fn set_up(&mut self, _container: &Arc<Container>) -> Result<()> {
        Ok(())
    }

    /// Runs before the base tear-down
    fn tear_down(&mut self) -> Result<()> {
        Ok(())
    }
}

/// No fixture-specific behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl FixtureHooks for NoHooks {}

// ============================================================================
// Harness
// ============================================================================

struct ActiveTest {
    method: String,
    options: TestOptions,
    initialization: InitializationReport,
    /// Set once set-up completed
    container: Option<Arc<Container>>,
}

/// What tear-down did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeardownReport {
    /// The reset pass
    pub reset: ResetReport,
    /// Environment cleanup, `None` when no set-up got past option resolution
    pub cleanup: Option<CleanupReport>,
}

/// Set-up and tear-down for the tests of one fixture
pub struct TestHarness<F: FixtureHooks = NoHooks> {
    fixture: String,
    config: HarnessConfig,
    source: Box<dyn OptionsSource>,
    pipeline: CompositionPipeline,
    hooks: F,
    paths: TestPaths,
    first_in_fixture: bool,
    active: Option<ActiveTest>,
}

impl TestHarness<NoHooks> {
    /// Harness for `fixture` without hooks
    pub fn new(fixture: &str, config: HarnessConfig) -> Result<Self> {
        Self::with_hooks(fixture, config, NoHooks)
    }

    /// Harness for `fixture` configured by [`ConfigLoader`] defaults
    pub fn from_default_config(fixture: &str) -> Result<Self> {
        Self::new(fixture, ConfigLoader::new().load()?)
    }
}

impl<F: FixtureHooks> TestHarness<F> {
    /// Harness for `fixture` running `hooks` around the base lifecycle
    ///
    /// Options are read from `config.options_file` when set; otherwise every
    /// test runs with the defaults until a source is supplied.
    pub fn with_hooks(fixture: &str, config: HarnessConfig, hooks: F) -> Result<Self> {
        if fixture.trim().is_empty() {
            return Err(Error::configuration("Fixture name cannot be empty"));
        }
        init_logging(&config.logging)?;

        let catalog = match &config.options_file {
            Some(path) => OptionsCatalog::from_file(path)?,
            None => OptionsCatalog::new(),
        };

        Ok(Self {
            fixture: fixture.to_string(),
            paths: TestPaths::for_fixture(&config.working_directory, fixture),
            config,
            source: Box::new(catalog),
            pipeline: CompositionPipeline::default(),
            hooks,
            first_in_fixture: true,
            active: None,
        })
    }

    /// Read options from `source`
    pub fn with_options_source(mut self, source: impl OptionsSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Compose containers with `pipeline`
    pub fn with_pipeline(mut self, pipeline: CompositionPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Prepare the environment for `method`
    pub fn set_up(&mut self, method: &str) -> Result<Arc<Container>> {
        let pre_reset = ResetManager::reset();
        if pre_reset.container_disposed {
            warn!(fixture = %self.fixture, "A container was still live at set-up; disposed it");
        }
        if let Some(stale) = self.active.take() {
            warn!(fixture = %self.fixture, method = %stale.method, "Previous test was not torn down");
            ResetManager::cleanup_environment(&stale.options, &self.paths, &stale.initialization.content_dirs);
        }

        let identity = TestIdentity::new(self.fixture.as_str(), method);
        let options = resolve_options(&identity, self.source.as_ref())?;
        let test = self.active.insert(ActiveTest {
            method: method.to_string(),
            options,
            initialization: InitializationReport::default(),
            container: None,
        });

        let container = ContainerLifecycle::create()?;
        virtual_path::set_base(&self.paths.root);

        let context = CompositionContext {
            options: &options,
            paths: &self.paths,
            config: &self.config,
        };
        self.pipeline.run(&container, &context)?;
        self.hooks.compose(&container, &context)?;

        InitializationPipeline::run_into(&container, &options, &self.paths, &mut test.initialization)?;
        container.seal();
        current::set(Arc::clone(&container));

        test.container = Some(Arc::clone(&container));
        info!(fixture = %self.fixture, method, ?options, "Test environment ready");

        self.hooks.set_up(&container)?;
        Ok(container)
    }

    /// Restore the environment after the current test
    ///
    /// The base tear-down always runs; a failing hook is reported after it.
    pub fn tear_down(&mut self) -> Result<TeardownReport> {
        let hook_result = self.hooks.tear_down();

        let reset = ResetManager::reset();
        let cleanup = self.active.take().map(|test| {
            ResetManager::cleanup_environment(&test.options, &self.paths, &test.initialization.content_dirs)
        });

        self.first_in_fixture = false;
        session::complete_test();

        hook_result?;
        Ok(TeardownReport { reset, cleanup })
    }

    /// Fixture name
    pub fn fixture(&self) -> &str {
        &self.fixture
    }

    /// Container of the running test
    pub fn container(&self) -> Option<Arc<Container>> {
        self.running().and_then(|test| test.container.clone())
    }

    /// Effective options of the running test
    pub fn options(&self) -> Option<TestOptions> {
        self.running().map(|test| test.options)
    }

    /// What initialization did for the running test
    pub fn initialization(&self) -> Option<&InitializationReport> {
        self.running().map(|test| &test.initialization)
    }

    fn running(&self) -> Option<&ActiveTest> {
        self.active.as_ref().filter(|test| test.container.is_some())
    }

    /// Fixture working directories
    pub fn paths(&self) -> &TestPaths {
        &self.paths
    }

    /// Harness configuration
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Fixture hooks
    pub fn hooks(&self) -> &F {
        &self.hooks
    }

    /// Whether no test of this fixture has been torn down yet
    pub fn is_first_test_in_fixture(&self) -> bool {
        self.first_in_fixture
    }
}
