use thiserror::Error;

/// The main error type for the `tether_app` library.
#[derive(Debug, Error)]
pub enum Error {
  #[error("Failed to read configuration file: {0}")]
  ConfigRead(#[from] std::io::Error),

  #[error("Failed to parse configuration: {0}")]
  ConfigParse(String),

  #[error("Invalid configuration value for '{field}': {message}")]
  InvalidConfigValue { field: String, message: String },

  #[error("Failed to set global tracing subscriber: {0}")]
  GlobalSubscriberSet(String),

  #[error("Dependency resolution failed: {0}")]
  Container(#[from] tether_ioc::Error),

  #[error("No route for {method} {path}")]
  RouteNotFound { method: String, path: String },

  #[error("Method {method} not allowed for {path}")]
  MethodNotAllowed { method: String, path: String },
}

/// A specialized `Result` type for `tether_app` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
