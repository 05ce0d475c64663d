//! Per-call resolution context and circular dependency detection.

use crate::container::Container;
use crate::core::{FactoryFn, InjectionKey, Instance, Provider};
use crate::error::{Error, Result};
use crate::inflight::ProviderId;
use crate::invoke::Arguments;
use once_cell::sync::OnceCell;
use std::any::Any;
use std::cell::RefCell;
use std::sync::Arc;

/// The state of one top-level resolution.
///
/// Every `Container::get` or `invoke` call creates a fresh `Resolver`. Factories
/// receive it so their own dependencies are resolved on the same stack, which
/// is how cycles are caught and how contextual bindings learn their consumer.
pub struct Resolver<'a> {
  container: &'a Container,
  stack: RefCell<Vec<Frame>>,
  supplied: Option<&'a Arguments>,
}

/// One capability under construction.
struct Frame {
  /// The capability that was requested. Cycles are detected on these.
  key: InjectionKey,
  /// Whose dependencies are being resolved: the concrete type when the
  /// provider runs a constructor, otherwise the capability itself.
  consumer: InjectionKey,
}

/// An RAII guard that keeps a capability on the resolution stack while it is
/// being built.
///
/// Entering fails if the key is already on the stack. Dropping the guard pops
/// the key again, including on early returns through `?`.
struct ResolutionGuard<'r, 'a> {
  resolver: &'r Resolver<'a>,
}

impl<'r, 'a> ResolutionGuard<'r, 'a> {
  fn enter(resolver: &'r Resolver<'a>, key: InjectionKey) -> Result<Self> {
    let mut stack = resolver.stack.borrow_mut();
    if let Some(start) = stack.iter().position(|frame| frame.key == key) {
      let mut path: Vec<&'static str> =
        stack[start..].iter().map(|frame| frame.key.type_name()).collect();
      path.push(key.type_name());
      return Err(Error::CyclicDependency { path });
    }
    stack.push(Frame {
      consumer: key.clone(),
      key,
    });
    drop(stack);
    Ok(Self { resolver })
  }
}

impl ResolutionGuard<'_, '_> {
  fn consumed_by(&self, consumer: &InjectionKey) {
    if let Some(frame) = self.resolver.stack.borrow_mut().last_mut() {
      frame.consumer = consumer.clone();
    }
  }
}

impl Drop for ResolutionGuard<'_, '_> {
  fn drop(&mut self) {
    self.resolver.stack.borrow_mut().pop();
  }
}

impl<'a> Resolver<'a> {
  pub(crate) fn new(container: &'a Container) -> Self {
    Self {
      container,
      stack: RefCell::new(Vec::new()),
      supplied: None,
    }
  }

  pub(crate) fn with_arguments(container: &'a Container, supplied: &'a Arguments) -> Self {
    Self {
      container,
      stack: RefCell::new(Vec::new()),
      supplied: Some(supplied),
    }
  }

  /// Resolves the unnamed capability `T`.
  pub fn resolve<T: ?Sized + Any + Send + Sync>(&self) -> Result<Arc<T>> {
    self.resolve_key(InjectionKey::of::<T>())
  }

  /// Resolves the capability `T` registered under `name`.
  pub fn resolve_named<T: ?Sized + Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
    self.resolve_key(InjectionKey::named::<T>(name))
  }

  /// The number of capabilities currently being built.
  pub fn depth(&self) -> usize {
    self.stack.borrow().len()
  }

  /// The type whose construction requested the capability being resolved now.
  fn consumer(&self) -> Option<InjectionKey> {
    self.stack.borrow().last().map(|frame| frame.consumer.clone())
  }

  pub(crate) fn resolve_key<T: ?Sized + Any + Send + Sync>(
    &self,
    key: InjectionKey,
  ) -> Result<Arc<T>> {
    // Supplied arguments only stand in for the callable's own parameters.
    if self.depth() == 0 {
      if let Some(value) = self.supplied.and_then(|args| args.get::<T>(&key)) {
        tracing::trace!(capability = %key, "using supplied argument");
        return Ok(value);
      }
    }

    let consumer = self.consumer();
    let guard = ResolutionGuard::enter(self, key.clone())?;

    let provider = self
      .container
      .provider_for(consumer.as_ref(), &key)
      .ok_or_else(|| {
        self.container.record_miss(&key);
        Error::UnboundCapability { key: key.clone() }
      })?;
    if let Some(concrete) = provider.concrete() {
      guard.consumed_by(concrete);
    }

    tracing::trace!(
      capability = %key,
      scope = %provider.scope(),
      depth = self.depth(),
      "resolving"
    );
    self.produce(&key, &provider)
  }

  fn produce<T: ?Sized + Any + Send + Sync>(
    &self,
    key: &InjectionKey,
    provider: &Provider,
  ) -> Result<Arc<T>> {
    let mismatch = || Error::TypeMismatch { key: key.clone() };
    match provider {
      Provider::Instance { value } => value.downcast_ref::<Arc<T>>().cloned().ok_or_else(mismatch),
      Provider::Singleton { cell, factory, .. } => {
        let instance = match cell.get() {
          Some(instance) => instance,
          None => self.initialize(key, provider, cell, factory)?,
        };
        instance.downcast_ref::<Arc<T>>().cloned().ok_or_else(mismatch)
      }
      Provider::Transient { factory, .. } => factory(self)?
        .downcast::<Arc<T>>()
        .map(|arc_in_a_box| *arc_in_a_box)
        .map_err(|_| mismatch()),
    }
  }

  /// Builds a singleton, or waits for the thread already building it.
  ///
  /// Waiting is refused when that thread is itself waiting, directly or
  /// through others, on a singleton this thread is building.
  fn initialize<'p>(
    &self,
    key: &InjectionKey,
    provider: &Provider,
    cell: &'p OnceCell<Instance>,
    factory: &FactoryFn,
  ) -> Result<&'p Instance> {
    let id = provider as *const Provider as ProviderId;
    let in_flight = self.container.in_flight();
    let _ticket = in_flight.enter(id, key)?;
    cell.get_or_try_init(|| {
      in_flight.claim(id, key);
      factory(self)
    })
  }
}
