//! Configuration loading through figment
//!
//! Tests that mutate environment variables are `#[serial]`.

use std::env;
use std::io::Write;

use serial_test::serial;
use thunder_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig};

fn set_env(key: &str, value: &str) {
    // SAFETY: every test touching the environment is serialized
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: every test touching the environment is serialized
    unsafe {
        env::remove_var(key);
    }
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.logging, LoggingConfig::default());
    assert_eq!(config.logging.level, "info");
    assert!(config.registry.aliases.is_empty());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let file = write_config("[logging]\nlevel = \"warn\"\n");
    set_env("THUNDER_CFGTEST_LOGGING__LEVEL", "trace");

    let result = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("THUNDER_CFGTEST")
        .load();
    remove_env("THUNDER_CFGTEST_LOGGING__LEVEL");

    assert_eq!(result.expect("config loads").logging.level, "trace");
}

#[test]
#[serial]
fn test_env_keys_keep_single_underscores() {
    set_env("THUNDER_CFGTEST_LOGGING__JSON_FORMAT", "true");

    let result = ConfigLoader::new()
        .with_config_path("/nonexistent/thunder.toml")
        .with_env_prefix("THUNDER_CFGTEST")
        .load();
    remove_env("THUNDER_CFGTEST_LOGGING__JSON_FORMAT");

    assert!(result.expect("config loads").logging.json_format);
}

#[test]
#[serial]
fn test_invalid_level_from_env_is_rejected() {
    set_env("THUNDER_CFGTEST_LOGGING__LEVEL", "loud");

    let result = ConfigLoader::new()
        .with_config_path("/nonexistent/thunder.toml")
        .with_env_prefix("THUNDER_CFGTEST")
        .load();
    remove_env("THUNDER_CFGTEST_LOGGING__LEVEL");

    let err = result.expect_err("invalid level");
    assert!(err.to_string().contains("loud"));
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let file = write_config("[logging\nlevel = ");

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("THUNDER_CFGTEST_MALFORMED")
        .load()
        .expect_err("malformed TOML");
    assert!(matches!(
        err,
        thunder_domain::Error::Configuration { .. }
    ));
}

#[test]
fn test_empty_alias_target_is_rejected() {
    let file = write_config("[registry.aliases]\n\"Some.Alias\" = \"\"\n");

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("THUNDER_CFGTEST_ALIAS")
        .load()
        .expect_err("empty target");
    assert!(err.to_string().contains("Some.Alias"));
}

#[test]
fn test_builder_collects_aliases() {
    let config = ConfigBuilder::new()
        .with_alias("Microsoft.Data.SqlClient", "System.Data.SqlClient")
        .with_alias("MySqlConnector", "MySql.Data.MySqlClient")
        .build()
        .expect("valid config");
    assert_eq!(config.registry.aliases.len(), 2);
}
