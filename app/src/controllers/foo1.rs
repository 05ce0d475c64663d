use crate::repositories::FooAbstract;
use std::sync::Arc;
use tether_ioc::Injectable;

pub struct Foo1 {
  foo: Arc<dyn FooAbstract>,
}

impl Foo1 {
  pub fn index(&self) -> String {
    self.foo.index()
  }
}

impl Injectable for Foo1 {
  type Deps = (Arc<dyn FooAbstract>,);

  fn construct((foo,): Self::Deps) -> Self {
    Self { foo }
  }
}
