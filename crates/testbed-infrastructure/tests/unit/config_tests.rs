//! Configuration tests

use std::io::Write;
use testbed_domain::error::Error;
use testbed_infrastructure::config::{
    ConfigLoader, DatabaseMode, LoggerMode, OptionsCatalog, TestIdentity, TestOptions,
    TestOptionsOverride, resolve_options,
};
use testbed_infrastructure::constants::DEFAULT_LOG_LEVEL;

#[test]
fn test_method_options_win_over_fixture_options() {
    let catalog = OptionsCatalog::new()
        .with_fixture(
            "ContentTests",
            TestOptionsOverride::new()
                .with_mapping(true)
                .with_database(DatabaseMode::NewSchema),
        )
        .with_method(
            "ContentTests",
            "saves_without_database",
            TestOptionsOverride::new().with_database(DatabaseMode::None),
        );

    let options = resolve_options(
        &TestIdentity::new("ContentTests", "saves_without_database"),
        &catalog,
    )
    .expect("options should resolve");

    assert_eq!(options.database, DatabaseMode::None);
    assert!(options.mapping, "fixture value applies when the method is silent");
    assert_eq!(options.logger, LoggerMode::Mock, "unset at both levels falls back to the default");
}

#[test]
fn test_undeclared_test_gets_defaults() {
    let options = resolve_options(
        &TestIdentity::new("Unknown", "anything"),
        &OptionsCatalog::new(),
    )
    .expect("options should resolve");

    assert_eq!(options, TestOptions::default());
}

#[test]
fn test_missing_method_name_is_a_configuration_error() {
    let catalog = OptionsCatalog::new();

    let missing = resolve_options(&TestIdentity::fixture_only("ContentTests"), &catalog);
    let blank = resolve_options(&TestIdentity::new("ContentTests", "  "), &catalog);

    assert!(matches!(missing, Err(Error::Configuration { .. })));
    assert!(matches!(blank, Err(Error::Configuration { .. })));
}

#[test]
fn test_catalog_from_toml() {
    let catalog = OptionsCatalog::from_toml_str(
        r#"
        [fixtures.MediaTests]
        logger = "disabled"
        application = true

        [fixtures.MediaTests.methods.uploads]
        database = "empty"
        force_plugin_rescan = true
        "#,
    )
    .expect("document should parse");

    let options = resolve_options(&TestIdentity::new("MediaTests", "uploads"), &catalog)
        .expect("options should resolve");

    assert_eq!(options.logger, LoggerMode::Disabled);
    assert!(options.application);
    assert_eq!(options.database, DatabaseMode::NewEmpty);
    assert!(options.force_plugin_rescan);
    assert_eq!(catalog.fixture_names(), vec!["MediaTests"]);
}

#[test]
fn test_catalog_rejects_unknown_mode() {
    let result = OptionsCatalog::from_toml_str(
        r#"
        [fixtures.Broken]
        database = "sometimes"
        "#,
    );

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_loader_defaults() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let config = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("missing.toml"))
        .load()
        .expect("defaults should load");

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.plugins.scan_targets, vec!["testbed.core", "testbed.web"]);
    assert!(config.options_file.is_none());
}

#[test]
fn test_loader_reads_toml_file() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let config_path = temp_dir.path().join("testbed.toml");
    let mut file = std::fs::File::create(&config_path).expect("create config");
    writeln!(
        file,
        r#"
working_directory = "/tmp/testbed-loader"

[logging]
level = "debug"

[plugins]
scan_targets = ["testbed.core", "testbed.extensions"]
"#
    )
    .expect("write config");

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .expect("config should load");

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.working_directory, std::path::PathBuf::from("/tmp/testbed-loader"));
    assert_eq!(config.plugins.scan_targets.len(), 2);
}

#[test]
fn test_loader_rejects_empty_scan_targets() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let config_path = temp_dir.path().join("testbed.toml");
    std::fs::write(&config_path, "[plugins]\nscan_targets = []\n").expect("write config");

    let result = ConfigLoader::new().with_config_path(&config_path).load();

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_loader_rejects_invalid_log_level() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let config_path = temp_dir.path().join("testbed.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"chatty\"\n").expect("write config");

    let result = ConfigLoader::new().with_config_path(&config_path).load();

    assert!(result.is_err());
}
