//! Harness lifecycle tests

use serial_test::serial;
use std::sync::{Arc, Mutex};
use testbed_application::{MappingEngine, ServiceContext};
use testbed_domain::constants::{FS_MEDIA, FS_SCRIPTS};
use testbed_domain::error::{Error, Result};
use testbed_domain::ports::{DatabaseFactory, FileSystem, LogLevel, Logger};
use testbed_domain::value_objects::{ContentType, ContentTypeDisplay, PropertyType};
use testbed_infrastructure::composition::CompositionContext;
use testbed_infrastructure::config::{
    ConfigLoader, DatabaseMode, HarnessConfig, LoggerMode, OptionsCatalog, TestOptionsOverride,
};
use testbed_infrastructure::di::Container;
use testbed_infrastructure::harness::{FixtureHooks, TestHarness};
use testbed_infrastructure::session;
use testbed_infrastructure::state::{current, legacy_kinds};

const FIXTURE: &str = "HarnessTests";

fn harness(dir: &tempfile::TempDir, catalog: OptionsCatalog) -> TestHarness {
    TestHarness::new(FIXTURE, HarnessConfig::default().with_working_directory(dir.path()))
        .expect("harness")
        .with_options_source(catalog)
}

fn article() -> ContentType {
    ContentType {
        alias: "article".to_string(),
        name: "Article".to_string(),
        icon: Some("icon-newspaper".to_string()),
        property_types: vec![PropertyType {
            alias: "body".to_string(),
            name: "Body".to_string(),
            editor_alias: "Testbed.TextArea".to_string(),
            mandatory: false,
        }],
    }
}

#[test]
#[serial]
fn test_mapping_and_application_end_to_end() {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = OptionsCatalog::new().with_method(
        FIXTURE,
        "maps_content_types",
        TestOptionsOverride::new()
            .with_logger(LoggerMode::Mock)
            .with_mapping(true)
            .with_database(DatabaseMode::None)
            .with_application(true),
    );
    let mut harness = harness(&dir, catalog);

    let container = harness.set_up("maps_content_types").expect("set up");

    let engine = container.resolve::<MappingEngine>().expect("mapping engine");
    let display: ContentTypeDisplay = engine.map(&article()).expect("map");
    assert_eq!(display.icon, "icon-newspaper");
    assert_eq!(display.properties[0].label, "Body");

    let services = container.resolve::<ServiceContext>().expect("services");
    assert_eq!(services.url_segment("Hello World"), "hello-world");
    assert!(services.property_editor("Testbed.TextBox").is_some());
    assert!(services.property_editor("Testbed.ColorPicker").is_none());
    assert!(services.mapper_for("user").is_some());

    let scripts = container.resolve_named::<dyn FileSystem>(FS_SCRIPTS).expect("scripts");
    scripts.add_file("site.js", b"//").expect("write script");
    let media = container.resolve_named::<dyn FileSystem>(FS_MEDIA).expect("media");
    assert!(media.root().is_none());

    assert!(legacy_kinds::lookup(-88).is_some());
    assert!(Arc::ptr_eq(&current::container().expect("ambient"), &container));
    assert!(container.is_sealed());

    let content_dirs = harness.initialization().expect("running").content_dirs.clone();
    assert!(content_dirs.iter().all(|d| d.exists()));

    let report = harness.tear_down().expect("tear down");

    assert!(report.reset.container_disposed);
    assert!(current::container().is_none());
    assert!(content_dirs.iter().all(|d| !d.exists()));
    assert!(report.cleanup.expect("cleanup ran").failures.is_empty());
}

#[test]
#[serial]
fn test_database_none_disables_capability() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut harness = harness(&dir, OptionsCatalog::new());

    let container = harness.set_up("no_database").expect("set up");

    let err = container.resolve::<dyn DatabaseFactory>().err().expect("disabled");
    assert!(matches!(err, Error::CapabilityDisabled { .. }));
    assert!(container.resolve::<MappingEngine>().err().expect("disabled").is_capability_disabled());
    assert!(container.resolve::<ServiceContext>().err().expect("disabled").is_capability_disabled());

    harness.tear_down().expect("tear down");
}

#[test]
#[serial]
fn test_database_create_installs_schema_and_is_removed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = OptionsCatalog::new().with_fixture(
        FIXTURE,
        TestOptionsOverride::new().with_database(DatabaseMode::NewSchema),
    );
    let mut harness = harness(&dir, catalog);

    let container = harness.set_up("with_database").expect("set up");
    let database = container.resolve::<dyn DatabaseFactory>().expect("database");
    let path = database.database_path().to_path_buf();
    assert!(path.exists());
    assert!(database.has_schema().expect("schema"));

    harness.tear_down().expect("tear down");

    assert!(!database.is_open());
    assert!(!path.exists());
}

#[test]
#[serial]
fn test_real_logger_writes_to_fixture_log() {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = OptionsCatalog::new().with_method(
        FIXTURE,
        "logs_for_real",
        TestOptionsOverride::new().with_logger(LoggerMode::Real),
    );
    let mut harness = harness(&dir, catalog);

    let container = harness.set_up("logs_for_real").expect("set up");
    let logger = container.resolve::<dyn Logger>().expect("logger");
    logger.log(LogLevel::Warn, "harness_tests", "written through the real logger");
    let log_dir = harness.paths().logs.clone();

    harness.tear_down().expect("tear down");

    let contents = std::fs::read_dir(&log_dir)
        .expect("log dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| std::fs::read_to_string(entry.path()).unwrap_or_default())
        .collect::<String>();
    assert!(contents.contains("written through the real logger"));
}

#[derive(Clone, Default)]
struct RecordingHooks {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingHooks {
    fn record(&self, event: &str) {
        self.events.lock().expect("lock").push(event.to_string());
    }
}

impl FixtureHooks for RecordingHooks {
    fn compose(&mut self, container: &Container, _context: &CompositionContext<'_>) -> Result<()> {
        self.record(&format!("compose sealed={}", container.is_sealed()));
        container.register_instance(Arc::new("fixture extra".to_string()))
    }

    fn set_up(&mut self, container: &Arc<Container>) -> Result<()> {
        self.record(&format!("set_up ambient={}", current::is_initialized()));
        container.resolve::<String>().map(|_| ())
    }

    fn tear_down(&mut self) -> Result<()> {
        self.record(&format!("tear_down ambient={}", current::is_initialized()));
        Ok(())
    }
}

#[test]
#[serial]
fn test_fixture_hooks_run_inside_base_lifecycle() {
    let dir = tempfile::tempdir().expect("temp dir");
    let hooks = RecordingHooks::default();
    let events = Arc::clone(&hooks.events);
    let mut harness = TestHarness::with_hooks(
        FIXTURE,
        HarnessConfig::default().with_working_directory(dir.path()),
        hooks,
    )
    .expect("harness");

    assert!(harness.is_first_test_in_fixture());
    harness.set_up("first").expect("set up");
    harness.tear_down().expect("tear down");
    assert!(!harness.is_first_test_in_fixture());
    assert!(!session::is_first_test_in_session());

    assert_eq!(
        *events.lock().expect("lock"),
        vec![
            "compose sealed=false",
            "set_up ambient=true",
            "tear_down ambient=true",
        ]
    );
}

#[test]
#[serial]
fn test_blank_method_fails_set_up() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut harness = harness(&dir, OptionsCatalog::new());

    let result = harness.set_up("");

    assert!(matches!(result, Err(Error::Configuration { .. })));
    assert!(harness.container().is_none());
}

#[test]
#[serial]
fn test_harness_from_default_config_uses_loader() {
    let expected = ConfigLoader::new().load().expect("default config");

    let harness = TestHarness::from_default_config(FIXTURE).expect("harness");

    assert_eq!(harness.config(), &expected);
    assert!(harness.paths().root.starts_with(&expected.working_directory));
}
