//! The main `Container` struct and its associated methods.

use crate::contextual::ContextualBindingBuilder;
use crate::core::{FactoryFn, InjectionKey, Instance, Provider, Scope};
use crate::deps::{Callable, Dependencies, Factory, Injectable};
use crate::error::{BoxError, Error, Result};
use crate::inflight::InFlight;
use crate::invoke::Arguments;
use crate::resolver::Resolver;
use dashmap::{DashMap, DashSet};
use std::any::Any;
use std::convert::Infallible;
use std::sync::Arc;

const MAX_RECORDED_MISSES: usize = 1024;

/// The Inversion of Control (IoC) container.
///
/// It holds three tables: global bindings keyed by capability, contextual
/// bindings keyed by (consumer, capability), and the constructor manifest used
/// for implicit self-resolution of concrete types. It is thread-safe, but
/// bindings are meant to be registered during bootstrap, before the first
/// resolution.
#[derive(Default)]
pub struct Container {
  providers: DashMap<InjectionKey, Arc<Provider>>,
  contextual: DashMap<(InjectionKey, InjectionKey), Arc<Provider>>,
  constructors: DashMap<InjectionKey, Arc<Provider>>,
  misses: DashSet<InjectionKey>,
  in_flight: InFlight,
}

/// Wraps a typed factory into the type-erased form the registry stores.
fn erase<T, D, E, F>(factory: F) -> FactoryFn
where
  T: ?Sized + Any + Send + Sync,
  D: Dependencies,
  E: Into<BoxError>,
  F: Fn(D) -> std::result::Result<Arc<T>, E> + Send + Sync + 'static,
{
  Box::new(move |resolver: &Resolver<'_>| {
    let deps = D::resolve(resolver)?;
    let instance = factory(deps).map_err(|e| Error::invocation(std::any::type_name::<T>(), e))?;
    Ok(Box::new(instance) as Instance)
  })
}

pub(crate) fn erase_constructor<I, C, F>(cast: F) -> FactoryFn
where
  I: ?Sized + Any + Send + Sync,
  C: Injectable,
  F: Fn(Arc<C>) -> Arc<I> + Send + Sync + 'static,
{
  erase::<I, C::Deps, Infallible, _>(move |deps: C::Deps| Ok(cast(Arc::new(C::construct(deps)))))
}

pub(crate) fn erase_factory<I, D, F>(factory: F) -> FactoryFn
where
  I: ?Sized + Any + Send + Sync,
  D: Dependencies,
  F: Factory<D, Arc<I>>,
{
  erase::<I, D, Infallible, _>(move |deps: D| Ok(factory.make(deps)))
}

impl Container {
  /// Creates a new, empty `Container`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- PRIVATE HELPERS ---

  fn register(&self, key: InjectionKey, provider: Provider) {
    if self.misses.remove(&key).is_some() {
      tracing::warn!(
        capability = %key,
        "capability registered after a resolution already failed to find it"
      );
    }
    let scope = provider.scope();
    match self.providers.insert(key.clone(), Arc::new(provider)) {
      Some(_) => tracing::debug!(capability = %key, %scope, "replaced binding"),
      None => tracing::debug!(capability = %key, %scope, "registered binding"),
    }
  }

  pub(crate) fn register_contextual(&self, consumer: InjectionKey, key: InjectionKey, provider: Provider) {
    tracing::debug!(
      consumer = %consumer,
      capability = %key,
      scope = %provider.scope(),
      "registered contextual binding"
    );
    self.contextual.insert((consumer, key), Arc::new(provider));
  }

  /// Picks the provider for `key`: a contextual binding for `consumer` first,
  /// then the global binding, then an autowired constructor.
  ///
  /// The returned `Arc` is cloned out of the map so no shard lock is held while
  /// the provider runs user code.
  pub(crate) fn provider_for(
    &self,
    consumer: Option<&InjectionKey>,
    key: &InjectionKey,
  ) -> Option<Arc<Provider>> {
    if let Some(consumer) = consumer {
      let pair = (consumer.clone(), key.clone());
      if let Some(provider) = self.contextual.get(&pair) {
        return Some(Arc::clone(provider.value()));
      }
    }
    if let Some(provider) = self.providers.get(key) {
      return Some(Arc::clone(provider.value()));
    }
    self
      .constructors
      .get(key)
      .map(|provider| Arc::clone(provider.value()))
  }

  pub(crate) fn in_flight(&self) -> &InFlight {
    &self.in_flight
  }

  /// Remembers an unbound lookup so a later registration of the same key can
  /// be flagged. Named lookups are not remembered, and the set stops growing
  /// at [`MAX_RECORDED_MISSES`].
  pub(crate) fn record_miss(&self, key: &InjectionKey) {
    tracing::debug!(capability = %key, "no provider bound");
    if key.name().is_none() && self.misses.len() < MAX_RECORDED_MISSES {
      self.misses.insert(key.clone());
    }
  }

  // --- PUBLIC API ---

  // --- Instance Registration ---
  pub fn add_instance<T: Any + Send + Sync>(&self, instance: T) {
    self.add_instance_with_key(InjectionKey::of::<T>(), Arc::new(instance));
  }
  pub fn add_instance_with_name<T: Any + Send + Sync>(&self, name: &str, instance: T) {
    self.add_instance_with_key(InjectionKey::named::<T>(name), Arc::new(instance));
  }
  /// Registers an already shared instance, typically a `dyn Trait` object.
  pub fn add_shared<T: ?Sized + Any + Send + Sync>(&self, instance: Arc<T>) {
    self.add_instance_with_key(InjectionKey::of::<T>(), instance);
  }

  fn add_instance_with_key<T: ?Sized + Any + Send + Sync>(&self, key: InjectionKey, instance: Arc<T>) {
    self.register(key, Provider::instance(Box::new(instance)));
  }

  // --- Singleton Registration ---
  pub fn add_singleton<T: Any + Send + Sync, D: Dependencies>(&self, factory: impl Factory<D, T>) {
    self.add_sized(None, Scope::Singleton, factory);
  }
  pub fn add_singleton_with_name<T: Any + Send + Sync, D: Dependencies>(
    &self,
    name: &str,
    factory: impl Factory<D, T>,
  ) {
    self.add_sized(Some(name), Scope::Singleton, factory);
  }

  // --- Transient Registration ---
  pub fn add_transient<T: Any + Send + Sync, D: Dependencies>(&self, factory: impl Factory<D, T>) {
    self.add_sized(None, Scope::Transient, factory);
  }
  pub fn add_transient_with_name<T: Any + Send + Sync, D: Dependencies>(
    &self,
    name: &str,
    factory: impl Factory<D, T>,
  ) {
    self.add_sized(Some(name), Scope::Transient, factory);
  }

  fn add_sized<T: Any + Send + Sync, D: Dependencies>(
    &self,
    name: Option<&str>,
    scope: Scope,
    factory: impl Factory<D, T>,
  ) {
    let erased = erase::<T, D, Infallible, _>(move |deps: D| Ok(Arc::new(factory.make(deps))));
    self.register(
      InjectionKey::new::<T>(name),
      Provider::with_scope(scope, D::keys(), erased),
    );
  }

  // --- Abstract Bindings ---

  /// Binds the capability `I` (usually `dyn Trait`) to a factory producing it.
  pub fn bind<I: ?Sized + Any + Send + Sync, D: Dependencies>(
    &self,
    scope: Scope,
    factory: impl Factory<D, Arc<I>>,
  ) {
    self.register(
      InjectionKey::of::<I>(),
      Provider::with_scope(scope, D::keys(), erase_factory::<I, D, _>(factory)),
    );
  }
  pub fn bind_with_name<I: ?Sized + Any + Send + Sync, D: Dependencies>(
    &self,
    name: &str,
    scope: Scope,
    factory: impl Factory<D, Arc<I>>,
  ) {
    self.register(
      InjectionKey::named::<I>(name),
      Provider::with_scope(scope, D::keys(), erase_factory::<I, D, _>(factory)),
    );
  }

  /// Like [`bind`](Self::bind), for factories that can fail. The factory's error
  /// surfaces as [`Error::InvocationFailure`] and a failed singleton stays unbuilt.
  pub fn try_bind<I, D, E, F>(&self, scope: Scope, factory: F)
  where
    I: ?Sized + Any + Send + Sync,
    D: Dependencies,
    E: Into<BoxError>,
    F: Factory<D, std::result::Result<Arc<I>, E>>,
  {
    let erased = erase::<I, D, E, _>(move |deps: D| factory.make(deps));
    self.register(
      InjectionKey::of::<I>(),
      Provider::with_scope(scope, D::keys(), erased),
    );
  }

  /// Binds the capability `I` to the concrete type `C`, built through its
  /// [`Injectable`] constructor. `cast` turns the concrete `Arc<C>` into `Arc<I>`.
  ///
  /// Binding a type to itself (`bind_to::<C, C>(Scope::Singleton, |c| c)`) is how
  /// a concrete helper gets a singleton lifetime.
  pub fn bind_to<I, C>(&self, scope: Scope, cast: impl Fn(Arc<C>) -> Arc<I> + Send + Sync + 'static)
  where
    I: ?Sized + Any + Send + Sync,
    C: Injectable,
  {
    self.register(
      InjectionKey::of::<I>(),
      Provider::with_scope(scope, C::Deps::keys(), erase_constructor::<I, C, _>(cast))
        .constructed_as(InjectionKey::of::<C>()),
    );
  }

  /// Records `C`'s constructor so that `C` resolves without an explicit binding.
  /// Self-resolved instances are transient. An explicit binding for `C` wins.
  pub fn autowire<C: Injectable>(&self) {
    let key = InjectionKey::of::<C>();
    tracing::debug!(capability = %key, "autowired constructor");
    let provider = Provider::with_scope(
      Scope::Transient,
      C::Deps::keys(),
      erase_constructor::<C, C, _>(|concrete: Arc<C>| concrete),
    )
    .constructed_as(key.clone());
    self.constructors.insert(key, Arc::new(provider));
  }

  /// Starts a contextual binding: `when::<Consumer>().needs::<dyn I>().give(..)`.
  pub fn when<C: ?Sized + Any>(&self) -> ContextualBindingBuilder<'_> {
    ContextualBindingBuilder::new(self, InjectionKey::of::<C>())
  }

  // --- Introspection ---

  /// Whether `T` can be resolved without a consumer context: it has a global
  /// binding or an autowired constructor.
  pub fn contains<T: ?Sized + Any>(&self, name: Option<&str>) -> bool {
    let key = InjectionKey::new::<T>(name);
    self.providers.contains_key(&key) || self.constructors.contains_key(&key)
  }

  /// The capabilities `T`'s provider depends on, in declared order.
  pub fn dependencies_of<T: ?Sized + Any>(&self, name: Option<&str>) -> Option<Vec<InjectionKey>> {
    self
      .provider_for(None, &InjectionKey::new::<T>(name))
      .map(|provider| provider.dependencies().to_vec())
  }

  // --- Resolution ---

  /// Resolves a service from the container.
  pub fn get<T: ?Sized + Any + Send + Sync>(&self, name: Option<&str>) -> Result<Arc<T>> {
    Resolver::new(self).resolve_key(InjectionKey::new::<T>(name))
  }

  /// Resolves every parameter of `f` and calls it.
  ///
  /// Parameters present in `args` are taken from there instead of the container.
  /// If any parameter fails to resolve, `f` is not called.
  pub fn invoke<D, R, F>(&self, args: &Arguments, f: F) -> Result<R>
  where
    D: Dependencies,
    F: Callable<D, R>,
  {
    let resolver = Resolver::with_arguments(self, args);
    let deps = D::resolve(&resolver)?;
    Ok(f.call(deps))
  }

  /// Like [`invoke`](Self::invoke), for callables that can fail. Their error is
  /// wrapped in [`Error::InvocationFailure`].
  pub fn try_invoke<D, R, E, F>(&self, args: &Arguments, f: F) -> Result<R>
  where
    D: Dependencies,
    E: Into<BoxError>,
    F: Callable<D, std::result::Result<R, E>>,
  {
    self
      .invoke(args, f)?
      .map_err(|e| Error::invocation(std::any::type_name::<F>(), e))
  }

  /// [`invoke`](Self::invoke) with no supplied arguments.
  pub fn call<D, R, F>(&self, f: F) -> Result<R>
  where
    D: Dependencies,
    F: Callable<D, R>,
  {
    self.invoke(&Arguments::new(), f)
  }
}
