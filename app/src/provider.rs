//! Wires the demo application's bindings into a container.

use crate::config::{BindingsConfig, FooBinding};
use crate::controllers::{Foo1, Foobarzip, MagicNumber};
use crate::repositories::{
  Bar, Baz, Foo, FooAbstract, FooConcrete1, RandomRepository, RandomRepositoryInterface,
};
use std::sync::Arc;
use tether_ioc::{Container, Scope};

pub struct AppServiceProvider;

impl AppServiceProvider {
  pub fn register(container: &Container, bindings: &BindingsConfig) {
    container.autowire::<Bar>();
    container.autowire::<Baz>();
    container.autowire::<Foo>();
    container.autowire::<Foobarzip>();
    container.autowire::<MagicNumber>();
    container.autowire::<Foo1>();

    container.bind_to::<dyn RandomRepositoryInterface, RandomRepository>(
      bindings.random_scope.into(),
      |repo| repo as Arc<dyn RandomRepositoryInterface>,
    );

    match bindings.foo {
      FooBinding::Global => {
        container.bind_to::<dyn FooAbstract, FooConcrete1>(Scope::Transient, |foo| {
          foo as Arc<dyn FooAbstract>
        });
      }
      FooBinding::Contextual => {
        container
          .when::<Foo1>()
          .needs::<dyn FooAbstract>()
          .give_to::<FooConcrete1>(Scope::Transient, |foo| foo as Arc<dyn FooAbstract>);
      }
    }

    tracing::info!(
      foo = ?bindings.foo,
      random_scope = ?bindings.random_scope,
      "application services registered"
    );
  }
}

/// A fresh container with every application binding registered.
pub fn bootstrap(bindings: &BindingsConfig) -> Arc<Container> {
  let container = Container::new();
  AppServiceProvider::register(&container, bindings);
  Arc::new(container)
}
