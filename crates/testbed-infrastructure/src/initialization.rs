//! Initialization Pipeline
//!
//! Setup that needs the populated container. Runs after composition and
//! registers nothing new.
//!
//! 1. **mapping activation**: builds one engine from every registered
//!    mapping profile and installs it process-wide
//! 2. **application bootstrap**: creates content directories, writes the
//!    settings file and seeds the legacy kind table

use crate::config::TestOptions;
use crate::constants::SETTINGS_FILE_NAME;
use crate::di::Container;
use crate::error_ext::ErrorContext;
use crate::harness::TestPaths;
use crate::state::{legacy_kinds, mapping};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use testbed_application::ports::MappingProfile;
use testbed_application::{MappingConfiguration, PluginManager};
use testbed_domain::constants::PHYSICAL_FILE_SYSTEM_ROLES;
use testbed_domain::error::{Error, Result};
use testbed_domain::ports::FileSystem;
use testbed_domain::value_objects::Settings;
use tracing::{debug, info};

/// What initialization did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitializationReport {
    /// A mapping engine was installed
    pub mapping_activated: bool,
    /// Outermost directories created for physical file systems
    pub content_dirs: Vec<PathBuf>,
    /// Settings file written
    pub settings_file: Option<PathBuf>,
    /// This run seeded the legacy kind table
    pub legacy_kinds_seeded: bool,
}

/// Post-composition setup
pub struct InitializationPipeline;

impl InitializationPipeline {
    /// Run every step enabled by `options`
    pub fn run(container: &Container, options: &TestOptions, paths: &TestPaths) -> Result<InitializationReport> {
        let mut report = InitializationReport::default();
        Self::run_into(container, options, paths, &mut report)?;
        Ok(report)
    }

    /// Run every step enabled by `options`, recording into `report`
    ///
    /// On failure `report` still lists what was created on disk before the
    /// failing step, so the caller can clean it up.
    pub fn run_into(
        container: &Container,
        options: &TestOptions,
        paths: &TestPaths,
        report: &mut InitializationReport,
    ) -> Result<()> {
        if options.mapping {
            activate_mapping(container).map_err(|e| Error::initialization("mapping activation", e))?;
            report.mapping_activated = true;
        }

        if options.application {
            bootstrap_application(container, paths, report)
                .map_err(|e| Error::initialization("application bootstrap", e))?;
        }

        debug!(?report, "Initialized container");
        Ok(())
    }
}

fn activate_mapping(container: &Container) -> Result<()> {
    let profiles = container.resolve_all::<dyn MappingProfile>()?;
    let mut configuration = MappingConfiguration::new();
    for profile in &profiles {
        configuration.add_profile(profile.as_ref());
    }
    let engine = configuration.build()?;
    info!(
        profiles = profiles.len(),
        maps = engine.map_count(),
        "Activated mapping engine"
    );
    mapping::install(Arc::new(engine));
    Ok(())
}

fn bootstrap_application(
    container: &Container,
    paths: &TestPaths,
    report: &mut InitializationReport,
) -> Result<()> {
    for role in PHYSICAL_FILE_SYSTEM_ROLES {
        let file_system = container.resolve_named::<dyn FileSystem>(role)?;
        if let Some(root) = file_system.root() {
            let created = topmost_missing(root);
            std::fs::create_dir_all(root)
                .io_context(format!("Failed to create content directory {}", root.display()))?;
            if let Some(dir) = created {
                report.content_dirs.push(dir);
            }
        }
    }

    let settings = container.resolve::<Settings>()?;
    let document = toml::to_string_pretty(settings.as_ref()).context("Failed to serialize settings")?;
    std::fs::create_dir_all(&paths.config)
        .io_context(format!("Failed to create {}", paths.config.display()))?;
    let settings_file = paths.config.join(SETTINGS_FILE_NAME);
    std::fs::write(&settings_file, document)
        .io_context(format!("Failed to write {}", settings_file.display()))?;
    report.settings_file = Some(settings_file);

    let plugins = container.resolve::<PluginManager>()?;
    report.legacy_kinds_seeded = legacy_kinds::seed_if_empty(plugins.legacy_kinds());
    if report.legacy_kinds_seeded {
        info!(entries = legacy_kinds::len(), "Seeded legacy kind table");
    }
    Ok(())
}

/// Outermost ancestor of `path` (or `path` itself) that does not exist yet
fn topmost_missing(path: &Path) -> Option<PathBuf> {
    if path.exists() {
        return None;
    }
    let mut missing = path;
    while let Some(parent) = missing.parent() {
        if parent.as_os_str().is_empty() || parent.exists() {
            break;
        }
        missing = parent;
    }
    Some(missing.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topmost_missing_points_at_first_created_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let nested = dir.path().join("views").join("partials");

        assert_eq!(topmost_missing(&nested), Some(dir.path().join("views")));

        std::fs::create_dir_all(&nested).expect("create");
        assert_eq!(topmost_missing(&nested), None);
    }
}
