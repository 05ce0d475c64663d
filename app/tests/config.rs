use pretty_assertions::assert_eq;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;
use tether_app::{
  config::{find_config_file, AppConfig, FooBinding, LogFormat, ScopeSetting},
  Error,
};

const BASE: &str = "bindings:\n  foo: global\n";
const DEV: &str = "bindings:\n  foo: contextual\n  random_scope: singleton\nlogging:\n  format: compact\n";

fn clear_env() {
  std::env::remove_var("TETHER_ENV");
  std::env::remove_var("APP_ENV");
}

#[test]
#[serial]
fn test_missing_file_yields_none() {
  clear_env();
  let dir = tempdir().unwrap();
  assert_eq!(find_config_file(dir.path(), None), None);
}

#[test]
#[serial]
fn test_base_file_is_found() {
  clear_env();
  let dir = tempdir().unwrap();
  fs::write(dir.path().join("tether.yaml"), BASE).unwrap();

  let path = find_config_file(dir.path(), None).unwrap();
  assert_eq!(path, dir.path().join("tether.yaml"));

  let config = AppConfig::from_file(&path).unwrap();
  assert_eq!(config.bindings.foo, FooBinding::Global);
}

#[test]
#[serial]
fn test_environment_file_is_preferred() {
  // Arrange
  clear_env();
  let dir = tempdir().unwrap();
  fs::write(dir.path().join("tether.yaml"), BASE).unwrap();
  fs::write(dir.path().join("tether.dev.yaml"), DEV).unwrap();

  // Act
  let explicit = find_config_file(dir.path(), Some("dev")).unwrap();
  std::env::set_var("TETHER_ENV", "dev");
  let from_env = find_config_file(dir.path(), None).unwrap();
  clear_env();

  // Assert
  assert_eq!(explicit, dir.path().join("tether.dev.yaml"));
  assert_eq!(from_env, explicit);

  let config = AppConfig::from_file(&explicit).unwrap();
  assert_eq!(config.bindings.foo, FooBinding::Contextual);
  assert_eq!(config.bindings.random_scope, ScopeSetting::Singleton);
  assert_eq!(config.logging.format, LogFormat::Compact);
  assert_eq!(config.logging.level, "info");
}

#[test]
#[serial]
fn test_falls_back_when_environment_file_is_absent() {
  clear_env();
  std::env::set_var("APP_ENV", "prod");
  let dir = tempdir().unwrap();
  fs::write(dir.path().join("tether.yaml"), BASE).unwrap();

  let path = find_config_file(dir.path(), None);
  clear_env();

  assert_eq!(path, Some(dir.path().join("tether.yaml")));
}

#[test]
fn test_malformed_file_is_a_parse_error() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("tether.yaml");
  fs::write(&path, "bindings: [unclosed").unwrap();

  assert!(matches!(AppConfig::from_file(&path), Err(Error::ConfigParse(_))));
}

#[test]
fn test_unreadable_file_is_a_read_error() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("absent.yaml");

  assert!(matches!(AppConfig::from_file(&path), Err(Error::ConfigRead(_))));
}
