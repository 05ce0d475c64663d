use crate::core::InjectionKey;
use thiserror::Error;

/// Boxed error returned by fallible factories and callables.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for every resolution and invocation in `tether_ioc`.
#[derive(Debug, Error)]
pub enum Error {
  /// Nothing is bound for the capability and it has no autowired constructor.
  #[error("Failed to resolve capability {key}: no provider is bound")]
  UnboundCapability { key: InjectionKey },

  /// Resolution reached a capability that is already being resolved further up
  /// the same call. `path` starts and ends with the repeated capability.
  #[error("Circular dependency detected: {}", .path.join(" -> "))]
  CyclicDependency { path: Vec<&'static str> },

  /// A fallible factory or an invoked callable returned an error of its own.
  #[error("Invocation of {callable} failed: {source}")]
  InvocationFailure {
    callable: &'static str,
    #[source]
    source: BoxError,
  },

  #[error("Provider for {key} produced an instance of an unexpected type")]
  TypeMismatch { key: InjectionKey },
}

impl Error {
  pub(crate) fn invocation(callable: &'static str, source: impl Into<BoxError>) -> Self {
    Error::InvocationFailure {
      callable,
      source: source.into(),
    }
  }
}

/// A specialized `Result` type for `tether_ioc` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
