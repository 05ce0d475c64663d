//! Contextual bindings: "when `Consumer` needs `I`, give it this provider".

use crate::container::{erase_constructor, erase_factory, Container};
use crate::core::{InjectionKey, Provider, Scope};
use crate::deps::{Dependencies, Factory, Injectable};
use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

/// Returned by [`Container::when`].
pub struct ContextualBindingBuilder<'c> {
  container: &'c Container,
  consumer: InjectionKey,
}

/// Returned by [`ContextualBindingBuilder::needs`].
pub struct ContextualNeeds<'c, I: ?Sized> {
  container: &'c Container,
  consumer: InjectionKey,
  _capability: PhantomData<fn() -> Arc<I>>,
}

impl<'c> ContextualBindingBuilder<'c> {
  pub(crate) fn new(container: &'c Container, consumer: InjectionKey) -> Self {
    Self {
      container,
      consumer,
    }
  }

  pub fn needs<I: ?Sized + Any + Send + Sync>(self) -> ContextualNeeds<'c, I> {
    ContextualNeeds {
      container: self.container,
      consumer: self.consumer,
      _capability: PhantomData,
    }
  }
}

impl<I: ?Sized + Any + Send + Sync> ContextualNeeds<'_, I> {
  /// Gives the consumer whatever `factory` produces.
  pub fn give<D: Dependencies>(self, scope: Scope, factory: impl Factory<D, Arc<I>>) {
    let provider = Provider::with_scope(scope, D::keys(), erase_factory::<I, D, _>(factory));
    self
      .container
      .register_contextual(self.consumer, InjectionKey::of::<I>(), provider);
  }

  /// Gives the consumer an instance of the concrete type `C`.
  pub fn give_to<C: Injectable>(
    self,
    scope: Scope,
    cast: impl Fn(Arc<C>) -> Arc<I> + Send + Sync + 'static,
  ) {
    let provider = Provider::with_scope(scope, C::Deps::keys(), erase_constructor::<I, C, _>(cast))
      .constructed_as(InjectionKey::of::<C>());
    self
      .container
      .register_contextual(self.consumer, InjectionKey::of::<I>(), provider);
  }

  /// Gives the consumer one fixed, shared instance.
  pub fn give_instance(self, instance: Arc<I>) {
    let provider = Provider::instance(Box::new(instance));
    self
      .container
      .register_contextual(self.consumer, InjectionKey::of::<I>(), provider);
  }
}
