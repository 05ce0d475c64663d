//! Application configuration, read from `tether.yaml`.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::{
  env,
  fs::File,
  io,
  path::{Path, PathBuf},
};
use tether_ioc::Scope;

const DEFAULT_CONFIG_BASE_NAME: &str = "tether";
const DEFAULT_CONFIG_EXTENSION: &str = "yaml";

#[derive(Debug, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
  #[serde(default)]
  pub logging: LoggingConfig,
  #[serde(default)]
  pub bindings: BindingsConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
  /// An `EnvFilter` directive such as `info` or `tether_ioc=trace,info`.
  /// `RUST_LOG` takes precedence when set.
  #[serde(default = "default_level")]
  pub level: String,
  #[serde(default)]
  pub format: LogFormat,
}

fn default_level() -> String {
  "info".to_string()
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: default_level(),
      format: LogFormat::default(),
    }
  }
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
  #[default]
  Full,
  Compact,
  Json,
}

#[derive(Debug, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct BindingsConfig {
  #[serde(default)]
  pub foo: FooBinding,
  #[serde(default)]
  pub random_scope: ScopeSetting,
}

/// How `FooAbstract` reaches the `Foo1` controller.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum FooBinding {
  /// A plain global binding, visible to every consumer.
  #[default]
  Global,
  /// Only `Foo1` gets `FooConcrete1`; everyone else sees no binding.
  Contextual,
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScopeSetting {
  #[default]
  Transient,
  Singleton,
}

impl From<ScopeSetting> for Scope {
  fn from(setting: ScopeSetting) -> Self {
    match setting {
      ScopeSetting::Transient => Scope::Transient,
      ScopeSetting::Singleton => Scope::Singleton,
    }
  }
}

/// Finds the configuration file in `dir`, preferring an environment-specific one.
///
/// With `TETHER_ENV=dev` (or `APP_ENV=dev`, or `environment_suffix = Some("dev")`)
/// `tether.dev.yaml` is tried before `tether.yaml`. Returns `None` when neither exists.
pub fn find_config_file(dir: &Path, environment_suffix: Option<&str>) -> Option<PathBuf> {
  let env_from_var = environment_suffix
    .map(|s| s.to_string())
    .or_else(|| env::var("TETHER_ENV").ok())
    .or_else(|| env::var("APP_ENV").ok());

  let mut files_to_check: Vec<String> = Vec::new();
  if let Some(env_str) = env_from_var.filter(|s| !s.is_empty()) {
    files_to_check.push(format!(
      "{}.{}.{}",
      DEFAULT_CONFIG_BASE_NAME, env_str, DEFAULT_CONFIG_EXTENSION
    ));
  }
  files_to_check.push(format!("{}.{}", DEFAULT_CONFIG_BASE_NAME, DEFAULT_CONFIG_EXTENSION));

  files_to_check
    .into_iter()
    .map(|file_name| dir.join(file_name))
    .find(|path| path.is_file())
}

impl AppConfig {
  pub fn from_file(path: &Path) -> Result<Self> {
    let reader = io::BufReader::new(File::open(path)?);
    let config: AppConfig =
      serde_yaml::from_reader(reader).map_err(|e| Error::ConfigParse(e.to_string()))?;
    config.validate()?;
    Ok(config)
  }

  pub fn from_yaml(yaml: &str) -> Result<Self> {
    let config: AppConfig =
      serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse(e.to_string()))?;
    config.validate()?;
    Ok(config)
  }

  /// Loads the configuration from the current directory, falling back to
  /// defaults when no file exists.
  pub fn discover() -> Result<Self> {
    match find_config_file(Path::new("."), None) {
      Some(path) => {
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::from_file(&path)
      }
      None => Ok(Self::default()),
    }
  }

  fn validate(&self) -> Result<()> {
    if self.logging.level.trim().is_empty() {
      return Err(Error::InvalidConfigValue {
        field: "logging.level".to_string(),
        message: "must not be empty".to_string(),
      });
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn empty_document_uses_defaults() {
    let config = AppConfig::from_yaml("{}").unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.bindings.foo, FooBinding::Global);
  }

  #[test]
  fn parses_every_field() {
    let yaml = r#"
logging:
  level: "tether_ioc=trace,info"
  format: json
bindings:
  foo: contextual
  random_scope: singleton
"#;
    let config = AppConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.logging.level, "tether_ioc=trace,info");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.bindings.foo, FooBinding::Contextual);
    assert_eq!(Scope::from(config.bindings.random_scope), Scope::Singleton);
  }

  #[test]
  fn rejects_unknown_fields() {
    let err = AppConfig::from_yaml("bindings:\n  bar: global\n").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
  }

  #[test]
  fn rejects_empty_level() {
    let err = AppConfig::from_yaml("logging:\n  level: \"  \"\n").unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { .. }));
  }
}
