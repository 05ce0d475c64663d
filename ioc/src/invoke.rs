//! Values supplied directly to an invocation.

use crate::core::{InjectionKey, Instance};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Arguments handed to [`Container::invoke`](crate::Container::invoke) by the
/// caller, such as the current request.
///
/// A callable parameter whose capability is present here is taken from the bag
/// instead of being resolved. Constructors further down the chain never see
/// these values.
#[derive(Default)]
pub struct Arguments {
  values: HashMap<InjectionKey, Instance>,
}

impl Arguments {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with<T: Any + Send + Sync>(self, value: T) -> Self {
    self.with_arc(Arc::new(value))
  }

  pub fn with_arc<T: ?Sized + Any + Send + Sync>(mut self, value: Arc<T>) -> Self {
    self.values.insert(InjectionKey::of::<T>(), Box::new(value));
    self
  }

  /// Named values only match named lookups, so they never fill a callable
  /// parameter. They exist for resolvers that ask for them explicitly.
  pub fn with_named<T: Any + Send + Sync>(mut self, name: &str, value: T) -> Self {
    self
      .values
      .insert(InjectionKey::named::<T>(name), Box::new(Arc::new(value)));
    self
  }

  pub(crate) fn get<T: ?Sized + Any + Send + Sync>(&self, key: &InjectionKey) -> Option<Arc<T>> {
    self.values.get(key)?.downcast_ref::<Arc<T>>().cloned()
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

impl fmt::Debug for Arguments {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.values.keys()).finish()
  }
}
