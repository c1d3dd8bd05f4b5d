//! Composition stage tests
//!
//! Stages run against standalone containers; only the plugin and
//! application stages touch process-wide state.

use serial_test::serial;
use std::sync::Arc;
use testbed_application::ProfilingLogger;
use testbed_application::collections::{MapperCollection, MapperCollectionBuilder};
use testbed_domain::error::Error;
use testbed_domain::ports::{DatabaseFactory, Logger, Profiler, RuntimeCache};
use testbed_infrastructure::composition::{
    CacheStage, CompositionContext, CompositionPipeline, CompositionStage, LoggingStage,
    PersistenceStage,
};
use testbed_infrastructure::config::{DatabaseMode, HarnessConfig, LoggerMode, TestOptions};
use testbed_infrastructure::di::Container;
use testbed_infrastructure::harness::TestPaths;
use testbed_infrastructure::reset::ResetManager;

fn fixture(dir: &tempfile::TempDir) -> (HarnessConfig, TestPaths) {
    let config = HarnessConfig::default().with_working_directory(dir.path());
    let paths = TestPaths::for_fixture(dir.path(), "CompositionTests");
    (config, paths)
}

#[test]
fn test_default_stage_order() {
    assert_eq!(
        CompositionPipeline::default().stage_names(),
        vec!["logging", "cache", "mapping", "plugins", "persistence", "application"]
    );
}

#[test]
fn test_stage_run_out_of_order_names_missing_capability() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (config, paths) = fixture(&dir);
    let options = TestOptions::default();
    let context = CompositionContext {
        options: &options,
        paths: &paths,
        config: &config,
    };

    let pipeline = CompositionPipeline::default().skip("logging");
    let err = pipeline
        .run(&Container::new(), &context)
        .expect_err("cache needs the profiling logger");

    match err {
        Error::CompositionOrder { stage, capability } => {
            assert_eq!(stage, "cache");
            assert!(capability.contains("ProfilingLogger"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_logging_stage_selects_logger_by_mode() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (config, paths) = fixture(&dir);

    for (mode, enabled, name) in [
        (LoggerMode::Disabled, false, "null"),
        (LoggerMode::Mock, true, "mock"),
    ] {
        let options = TestOptions {
            logger: mode,
            ..TestOptions::default()
        };
        let context = CompositionContext {
            options: &options,
            paths: &paths,
            config: &config,
        };
        let container = Container::new();

        LoggingStage.compose(&container, &context).expect("compose");

        let logger = container.resolve::<dyn Logger>().expect("logger");
        assert_eq!(logger.logger_name(), name);
        assert_eq!(logger.is_enabled(testbed_domain::ports::LogLevel::Debug), enabled);
        assert!(!container.resolve::<dyn Profiler>().expect("profiler").is_recording());
        container.resolve::<ProfilingLogger>().expect("profiling logger");
    }
}

#[test]
fn test_cache_stage_registers_disabled_caches() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (config, paths) = fixture(&dir);
    let options = TestOptions::default();
    let context = CompositionContext {
        options: &options,
        paths: &paths,
        config: &config,
    };
    let container = Container::new();

    LoggingStage.compose(&container, &context).expect("logging");
    CacheStage.compose(&container, &context).expect("cache");

    let cache = container.resolve::<dyn RuntimeCache>().expect("runtime cache");
    cache.insert("key", serde_json::json!("value"));
    assert!(cache.get("key").is_none());
}

#[test]
fn test_persistence_stage_modes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (config, paths) = fixture(&dir);

    let none = TestOptions::default();
    let container = Container::new();
    PersistenceStage
        .compose(
            &container,
            &CompositionContext {
                options: &none,
                paths: &paths,
                config: &config,
            },
        )
        .expect("compose none");
    assert!(container.is_disabled::<dyn DatabaseFactory>());
    assert!(!paths.data.exists());

    let create = TestOptions {
        database: DatabaseMode::NewSchema,
        ..TestOptions::default()
    };
    let container = Container::new();
    PersistenceStage
        .compose(
            &container,
            &CompositionContext {
                options: &create,
                paths: &paths,
                config: &config,
            },
        )
        .expect("compose create");
    let database = container.resolve::<dyn DatabaseFactory>().expect("database");
    assert!(database.has_schema().expect("schema"));
    assert!(database.database_path().exists());

    container.dispose().expect("dispose");
    assert!(!database.is_open());
}

#[test]
#[serial]
fn test_full_pipeline_replaces_service_layer_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (config, paths) = fixture(&dir);
    let options = TestOptions {
        application: true,
        ..TestOptions::default()
    };
    let context = CompositionContext {
        options: &options,
        paths: &paths,
        config: &config,
    };
    let container = Container::new();

    let report = CompositionPipeline::default()
        .run(&container, &context)
        .expect("pipeline");

    assert_eq!(report.ran.len(), 6);
    let overrides = container.overrides();
    assert_eq!(overrides.len(), 2);
    assert!(overrides.iter().all(|o| !o.reason.is_empty()));

    let builder = container.resolve::<MapperCollectionBuilder>().expect("mapper builder");
    assert!(builder.contains("content"));
    let mappers: Arc<MapperCollection> = container.resolve().expect("mappers");
    assert_eq!(mappers.len(), builder.len());

    container.dispose().expect("dispose");
    ResetManager::reset();
}
