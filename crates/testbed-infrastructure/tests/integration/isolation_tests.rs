//! Isolation between consecutive tests

use serial_test::serial;
use std::sync::Arc;
use testbed_application::PluginManager;
use testbed_domain::error::Error;
use testbed_infrastructure::config::{HarnessConfig, OptionsCatalog, TestOptionsOverride};
use testbed_infrastructure::di::ContainerLifecycle;
use testbed_infrastructure::reset::ResetManager;
use testbed_infrastructure::state::{GlobalStateSnapshot, PluginDiscoveryCache, settings};
use testbed_infrastructure::TestHarness;

const FIXTURE: &str = "IsolationTests";

fn catalog() -> OptionsCatalog {
    OptionsCatalog::new()
        .with_method(
            FIXTURE,
            "full_graph",
            TestOptionsOverride::new()
                .with_mapping(true)
                .with_application(true),
        )
        .with_method(
            FIXTURE,
            "plain",
            TestOptionsOverride::new().with_application(false),
        )
        .with_method(
            FIXTURE,
            "rescans",
            TestOptionsOverride::new().with_force_plugin_rescan(true),
        )
}

fn harness(dir: &tempfile::TempDir) -> TestHarness {
    TestHarness::new(FIXTURE, HarnessConfig::default().with_working_directory(dir.path()))
        .expect("harness")
        .with_options_source(catalog())
}

#[test]
#[serial]
fn test_global_state_returns_to_baseline() {
    ResetManager::reset();
    let baseline = GlobalStateSnapshot::capture();
    assert!(baseline.is_at_baseline());

    let dir = tempfile::tempdir().expect("temp dir");
    let mut harness = harness(&dir);

    harness.set_up("full_graph").expect("set up");
    settings::update(|s| s.debug = true);
    assert!(!GlobalStateSnapshot::capture().is_at_baseline());
    harness.tear_down().expect("tear down");

    assert_eq!(GlobalStateSnapshot::capture(), baseline);
}

#[test]
#[serial]
fn test_following_test_sees_no_leftover_content() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut harness = harness(&dir);

    harness.set_up("full_graph").expect("set up");
    let content_dirs = harness.initialization().expect("running").content_dirs.clone();
    assert!(!content_dirs.is_empty());
    harness.tear_down().expect("tear down");

    let container = harness.set_up("plain").expect("set up");
    assert!(content_dirs.iter().all(|d| !d.exists()));
    assert!(container.resolve::<testbed_application::ServiceContext>().is_err());
    harness.tear_down().expect("tear down");
}

#[test]
#[serial]
fn test_plugin_manager_is_shared_until_rescan() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut harness = harness(&dir);

    let first = harness
        .set_up("plain")
        .expect("set up")
        .resolve::<PluginManager>()
        .expect("plugins");
    harness.tear_down().expect("tear down");

    let second = harness
        .set_up("plain")
        .expect("set up")
        .resolve::<PluginManager>()
        .expect("plugins");
    harness.tear_down().expect("tear down");

    assert!(Arc::ptr_eq(&first, &second));

    let rescanned = harness
        .set_up("rescans")
        .expect("set up")
        .resolve::<PluginManager>()
        .expect("plugins");
    harness.tear_down().expect("tear down");

    assert_ne!(first.scan_id(), rescanned.scan_id());
    let cached = PluginDiscoveryCache::cached().expect("cached");
    assert!(Arc::ptr_eq(&cached, &rescanned));
}

#[test]
#[serial]
fn test_set_up_disposes_container_left_live() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut harness = harness(&dir);

    let abandoned = harness.set_up("plain").expect("set up");
    // No tear-down: the next set-up must dispose it
    let next = harness.set_up("plain").expect("set up again");

    assert!(abandoned.is_disposed());
    assert!(!next.is_disposed());
    assert_eq!(ContainerLifecycle::live().map(|c| c.id()), Some(next.id()));
    harness.tear_down().expect("tear down");
    assert!(ContainerLifecycle::live().is_none());
}

#[test]
#[serial]
fn test_failed_set_up_leaves_no_content_behind() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut harness = harness(&dir);
    let paths = harness.paths().clone();
    // Settings cannot be written when the config directory is a file
    std::fs::create_dir_all(&paths.root).expect("fixture root");
    std::fs::write(&paths.config, "in the way").expect("blocking file");

    let err = harness.set_up("full_graph").expect_err("bootstrap fails");
    assert!(matches!(err, Error::Initialization { .. }));
    assert!(harness.container().is_none());
    let created: Vec<_> = ["views", "scripts", "css"]
        .iter()
        .map(|name| paths.root.join(name))
        .collect();
    assert!(created.iter().any(|d| d.exists()));

    let report = harness.tear_down().expect("tear down");
    let cleanup = report.cleanup.expect("failed set-up is still cleaned up");
    assert!(!cleanup.removed.is_empty());
    assert!(ContainerLifecycle::live().is_none());

    harness.set_up("plain").expect("set up");
    assert!(created.iter().all(|d| !d.exists()));
    harness.tear_down().expect("tear down");
}

#[test]
#[serial]
fn test_failed_set_up_is_cleaned_up_by_next_set_up() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut harness = harness(&dir);
    let paths = harness.paths().clone();
    std::fs::create_dir_all(&paths.root).expect("fixture root");
    std::fs::write(&paths.config, "in the way").expect("blocking file");

    harness.set_up("full_graph").expect_err("bootstrap fails");
    let scripts = paths.root.join("scripts");
    assert!(scripts.exists());

    // No tear-down in between
    harness.set_up("plain").expect("set up");
    assert!(!scripts.exists());
    harness.tear_down().expect("tear down");
}
