//! Process-wide state tests

use serial_test::serial;
use std::path::PathBuf;
use std::sync::Arc;
use testbed_application::MappingConfiguration;
use testbed_domain::error::{Error, Result};
use testbed_domain::ports::Disposable;
use testbed_infrastructure::config::TestOptions;
use testbed_infrastructure::di::ContainerLifecycle;
use testbed_infrastructure::harness::TestPaths;
use testbed_infrastructure::reset::ResetManager;
use testbed_infrastructure::state::{
    DiscoveryOutcome, GlobalStateSnapshot, PluginDiscoveryCache, current, legacy_kinds, mapping,
    settings, virtual_path,
};

struct StuckHandle;

impl Disposable for StuckHandle {
    fn dispose(&self) -> Result<()> {
        Err(Error::internal("handle refused to close"))
    }

    fn resource_name(&self) -> &str {
        "stuck handle"
    }
}

fn scan_targets() -> Vec<String> {
    vec!["testbed.core".to_string(), "testbed.web".to_string()]
}

#[test]
#[serial]
fn test_only_one_live_container() {
    ResetManager::reset();

    let first = ContainerLifecycle::create().expect("first container");
    let second = ContainerLifecycle::create();

    assert!(matches!(second, Err(Error::ContainerAlreadyLive { .. })));
    assert_eq!(ContainerLifecycle::live().map(|c| c.id()), Some(first.id()));

    assert!(ContainerLifecycle::dispose().expect("dispose"));
    assert!(!ContainerLifecycle::dispose().expect("second dispose is a no-op"));
    assert!(first.is_disposed());
    ContainerLifecycle::create().expect("a new container after disposal");
    ResetManager::reset();
}

#[test]
#[serial]
fn test_reset_restores_baseline() {
    ResetManager::reset();
    let container = ContainerLifecycle::create().expect("container");
    current::set(container);
    virtual_path::set_base("/tmp/testbed-state");
    settings::update(|s| s.debug = true);

    assert!(!GlobalStateSnapshot::capture().is_at_baseline());

    let report = ResetManager::reset();

    assert!(report.container_disposed);
    assert_eq!(
        report.steps,
        vec![
            "ambient_accessor",
            "live_container",
            "virtual_path_base",
            "default_settings",
            "mapping_engine"
        ]
    );
    assert_eq!(GlobalStateSnapshot::capture(), GlobalStateSnapshot::baseline());
}

#[test]
#[serial]
fn test_virtual_path_base_override() {
    virtual_path::set_base("/srv/site");
    assert_eq!(virtual_path::map("~/css"), PathBuf::from("/srv/site/css"));

    virtual_path::reset();
    assert!(virtual_path::base_override().is_none());
}

#[test]
#[serial]
fn test_discovery_cache_reuse_and_rescan() {
    PluginDiscoveryCache::invalidate();

    let (first, outcome) = PluginDiscoveryCache::get_or_scan(&scan_targets(), false);
    assert_eq!(outcome, DiscoveryOutcome::Scanned);

    let (reused, outcome) = PluginDiscoveryCache::get_or_scan(&scan_targets(), false);
    assert_eq!(outcome, DiscoveryOutcome::Reused);
    assert!(std::sync::Arc::ptr_eq(&first, &reused));

    ResetManager::reset();
    let cached = PluginDiscoveryCache::cached().expect("reset leaves the cache alone");
    assert!(std::sync::Arc::ptr_eq(&first, &cached));

    let (rescanned, outcome) = PluginDiscoveryCache::get_or_scan(&scan_targets(), true);
    assert_eq!(outcome, DiscoveryOutcome::Rescanned);
    assert_ne!(first.scan_id(), rescanned.scan_id());
}

#[test]
#[serial]
fn test_legacy_kinds_seed_once() {
    let seeded_now = legacy_kinds::seed_if_empty([(-88, "Testbed.TextBox")]);
    let seeded_again = legacy_kinds::seed_if_empty([(-1, "Other")]);

    assert!(!seeded_again);
    if seeded_now {
        assert_eq!(legacy_kinds::lookup(-88).as_deref(), Some("Testbed.TextBox"));
    }
    assert!(legacy_kinds::lookup(-1).is_none());
}

#[test]
#[serial]
fn test_reset_continues_after_container_release_failure() {
    ResetManager::reset();
    let container = ContainerLifecycle::create().expect("container");
    container.track_disposable(Arc::new(StuckHandle)).expect("track");
    current::set(container);
    virtual_path::set_base("/tmp/testbed-stuck");
    settings::update(|s| s.debug = true);
    mapping::install(Arc::new(MappingConfiguration::new().build().expect("engine")));

    let report = ResetManager::reset();

    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].starts_with("live_container"));
    assert!(report.steps.contains(&"mapping_engine"));
    assert!(ContainerLifecycle::live().is_none());
    assert!(GlobalStateSnapshot::capture().is_at_baseline());
}

#[test]
fn test_cleanup_continues_after_failed_removal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = TestPaths::for_fixture(dir.path(), "CleanupTests");
    let scripts = paths.root.join("scripts");
    let css = paths.root.join("css");
    std::fs::create_dir_all(&scripts).expect("scripts");
    std::fs::create_dir_all(&css).expect("css");
    // A file where a directory is expected cannot be removed as one
    std::fs::create_dir_all(&paths.root).expect("root");
    std::fs::write(&paths.config, "not a directory").expect("config file");

    let options = TestOptions {
        application: true,
        ..TestOptions::default()
    };
    let blocked = paths.config.join("views");
    let report = ResetManager::cleanup_environment(&options, &paths, &[blocked, scripts.clone(), css.clone()]);

    assert!(!report.failures.is_empty());
    assert!(!scripts.exists());
    assert!(!css.exists());
    assert!(report.removed.contains(&scripts));
    assert!(report.removed.contains(&css));
}
