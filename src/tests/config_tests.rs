//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use super::test_utils::TestFixture;
use crate::config::{
    catalog::CatalogConfig, shell::OutputFormat, trie::TrieSettings, ConfigLoader, GradesConfig,
    LogConfig, Validate,
};
use crate::data_structures::KumuTrieConfig;
use crate::error::config::ConfigError;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = GradesConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.catalog.courses.len(), 5);
    assert_eq!(config.shell.output, OutputFormat::Text);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = GradesConfig::default();

    config.trie.max_name_length = 0;
    assert!(config.validate().is_err());

    config.trie.max_name_length = 32;
    config.catalog.min_mark = 60;
    config.catalog.max_mark = 50;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    config.catalog.max_mark = 100;
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());
}

/// Test that validation fails for various invalid catalogs.
#[test]
fn test_catalog_validation_rules() {
    let mut catalog = CatalogConfig::default();
    catalog.courses.clear();
    assert!(catalog.validate().is_err());

    let mut catalog = CatalogConfig::default();
    catalog.courses.push("Database".to_string());
    assert!(catalog.validate().is_err());

    let mut catalog = CatalogConfig::default();
    catalog.courses.push("Art, History".to_string());
    assert!(catalog.validate().is_err());

    let mut log = LogConfig::default();
    log.level = "debug".to_string();
    assert!(log.validate().is_ok());
}

/// Test that trie settings map onto the record store configuration.
#[test]
fn test_trie_settings_conversion() {
    let settings = TrieSettings {
        case_sensitive: false,
        max_name_length: 12,
    };
    let config = KumuTrieConfig::from(&settings);
    assert!(!config.case_sensitive);
    assert_eq!(config.max_name_length, 12);
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "grades.toml",
            r#"
    [catalog]
    courses = ["Physics", "Chemistry"]
    max_mark = 30

    [shell]
    output = "json"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert!(config.catalog.offers("Physics"));
    assert!(config.catalog.offers("Chemistry"));
    assert_eq!(config.catalog.max_mark, 30);
    assert_eq!(config.shell.output, OutputFormat::Json);

    // Other values should be defaults
    assert_eq!(config.catalog.min_mark, 0);
    assert!(config.trie.case_sensitive);
}

/// Test loading configuration from JSON.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("grades.json", r#"{ "trie": { "case_sensitive": false } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();
    assert!(!config.trie.case_sensitive);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "grades_env.toml",
            r#"
    [shell]
    prompt = "> "
    "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__SHELL__PROMPT", "env> ");
    fixture.set_env("TEST_ENV__CATALOG__MAX_MARK", "20");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    assert_eq!(config.shell.prompt, "env> ");
    assert_eq!(config.catalog.max_mark, 20);
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "invalid.toml",
            r#"
    [catalog
    courses = Physics"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(loader.load().is_err());
}

/// Test that a missing file and an unknown extension are reported as such.
#[test]
fn test_load_missing_or_unsupported_file() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("missing.toml");
    assert!(matches!(
        ConfigLoader::new(Some(&missing), "TEST_MISSING").load(),
        Err(ConfigError::FileNotFound(_))
    ));

    let ini = fixture.create_file("grades.ini", "x = 1").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&ini), "TEST_MISSING").load(),
        Err(ConfigError::ParseError(_))
    ));
}

/// Test that a loaded file still goes through validation.
#[test]
fn test_loaded_config_is_validated() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "bad_range.toml",
            r#"
    [catalog]
    min_mark = 90
    max_mark = 10
    "#,
        )
        .unwrap();

    assert!(matches!(
        ConfigLoader::new(Some(&config_path), "TEST_RANGE").load(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));
}
