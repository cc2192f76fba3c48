//! Tests for configuration resolution
//!
//! Covers the command line → environment → config file → default priority
//! order and the missing / malformed config file cases.
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that read or write PORT or CURRICULUM_* variables are marked with
//! #[serial] so they run sequentially, not in parallel.

use curriculum_common::config::{
    load_toml_config, CliOverrides, ServiceConfig, TomlConfig, DEFAULT_DATABASE_URL,
    DEFAULT_LOG_LEVEL, DEFAULT_PORT, ENV_CONFIG, ENV_DATABASE_URL, ENV_PORT, ENV_SOURCE,
};
use curriculum_common::Error;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_env() {
    env::remove_var(ENV_PORT);
    env::remove_var(ENV_SOURCE);
    env::remove_var(ENV_DATABASE_URL);
    env::remove_var(ENV_CONFIG);
}

fn file_config() -> TomlConfig {
    TomlConfig {
        port: Some(4000),
        source_file: Some(PathBuf::from("/srv/toml-courses.json")),
        database_url: Some("sqlite:///srv/toml.db".to_string()),
        log_level: Some("debug".to_string()),
    }
}

#[test]
#[serial]
fn test_defaults_when_nothing_configured() {
    clear_env();

    let config = ServiceConfig::from_sources(&CliOverrides::default(), &TomlConfig::default())
        .unwrap();

    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.port, 3220);
    assert_eq!(config.source_file, PathBuf::from("courses.json"));
    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
}

#[test]
#[serial]
fn test_toml_overrides_defaults() {
    clear_env();

    let config = ServiceConfig::from_sources(&CliOverrides::default(), &file_config()).unwrap();

    assert_eq!(config.port, 4000);
    assert_eq!(config.source_file, PathBuf::from("/srv/toml-courses.json"));
    assert_eq!(config.database_url, "sqlite:///srv/toml.db");
    assert_eq!(config.log_level, "debug");
}

#[test]
#[serial]
fn test_env_overrides_toml() {
    clear_env();
    env::set_var(ENV_PORT, "5000");
    env::set_var(ENV_SOURCE, "/srv/env-courses.json");
    env::set_var(ENV_DATABASE_URL, "sqlite:///srv/env.db");

    let config = ServiceConfig::from_sources(&CliOverrides::default(), &file_config()).unwrap();

    assert_eq!(config.port, 5000);
    assert_eq!(config.source_file, PathBuf::from("/srv/env-courses.json"));
    assert_eq!(config.database_url, "sqlite:///srv/env.db");

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    env::set_var(ENV_PORT, "5000");
    env::set_var(ENV_SOURCE, "/srv/env-courses.json");

    let cli = CliOverrides {
        port: Some(6000),
        source_file: Some(PathBuf::from("cli-courses.json")),
        database_url: Some("sqlite::memory:".to_string()),
        config_file: None,
    };
    let config = ServiceConfig::from_sources(&cli, &file_config()).unwrap();

    assert_eq!(config.port, 6000);
    assert_eq!(config.source_file, PathBuf::from("cli-courses.json"));
    assert_eq!(config.database_url, "sqlite::memory:");

    clear_env();
}

#[test]
#[serial]
fn test_empty_env_value_is_ignored() {
    clear_env();
    env::set_var(ENV_PORT, "");

    let config = ServiceConfig::from_sources(&CliOverrides::default(), &TomlConfig::default())
        .unwrap();

    assert_eq!(config.port, DEFAULT_PORT);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_port_env_is_config_error() {
    clear_env();
    env::set_var(ENV_PORT, "http");

    let result = ServiceConfig::from_sources(&CliOverrides::default(), &TomlConfig::default());

    assert!(matches!(result, Err(Error::Config(_))));

    clear_env();
}

#[test]
#[serial]
fn test_explicit_config_file_is_loaded() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 7000\nsource_file = \"y1.json\"\n").unwrap();

    let cli = CliOverrides {
        config_file: Some(path),
        ..Default::default()
    };
    let config = ServiceConfig::resolve(&cli).unwrap();

    assert_eq!(config.port, 7000);
    assert_eq!(config.source_file, PathBuf::from("y1.json"));
    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
}

#[test]
#[serial]
fn test_config_file_from_env() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, "database_url = \"sqlite://from-env-config.db\"\n").unwrap();
    env::set_var(ENV_CONFIG, &path);

    let config = load_toml_config(None).unwrap();

    assert_eq!(
        config.database_url.as_deref(),
        Some("sqlite://from-env-config.db")
    );

    clear_env();
}

#[test]
#[serial]
fn test_missing_explicit_config_file_errors() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();

    let result = load_toml_config(Some(&dir.path().join("nope.toml")));

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_malformed_config_file_errors() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = [").unwrap();

    let result = load_toml_config(Some(&path));

    assert!(matches!(result, Err(Error::Config(_))));
}
