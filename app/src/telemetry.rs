//! Installs the process-wide `tracing` subscriber.

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Builds the event filter: `RUST_LOG` if set, otherwise the configured level.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
  if let Ok(filter) = EnvFilter::try_from_default_env() {
    return Ok(filter);
  }
  EnvFilter::try_new(&config.level).map_err(|e| Error::InvalidConfigValue {
    field: "logging.level".to_string(),
    message: e.to_string(),
  })
}

/// Initializes logging. Records from the `log` crate are bridged as well.
///
/// Fails if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
  let builder = tracing_subscriber::fmt()
    .with_env_filter(env_filter(config)?)
    .with_target(true);

  let result = match config.format {
    LogFormat::Full => builder.try_init(),
    LogFormat::Compact => builder.compact().try_init(),
    LogFormat::Json => builder.json().try_init(),
  };
  result.map_err(|e| Error::GlobalSubscriberSet(e.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn invalid_level_is_a_config_error() {
    std::env::remove_var("RUST_LOG");
    let config = LoggingConfig {
      level: "tether_ioc=loudest".to_string(),
      format: LogFormat::Full,
    };
    assert!(matches!(
      env_filter(&config),
      Err(Error::InvalidConfigValue { .. })
    ));
  }

  #[test]
  #[serial]
  fn configured_level_is_used_without_rust_log() {
    std::env::remove_var("RUST_LOG");
    let config = LoggingConfig {
      level: "tether_ioc=trace,warn".to_string(),
      format: LogFormat::Compact,
    };
    assert!(env_filter(&config).is_ok());
  }
}
