use super::Bar;
use std::sync::Arc;
use tether_ioc::Injectable;

/// A helper that depends on [`Bar`] and hands it out again.
#[derive(Debug)]
pub struct Foo {
  bar: Arc<Bar>,
}

impl Foo {
  pub fn new(bar: Arc<Bar>) -> Self {
    Self { bar }
  }

  pub fn bar(&self) -> Arc<Bar> {
    Arc::clone(&self.bar)
  }

  pub fn foobarbazqux_from_bar(&self) -> &'static str {
    self.bar.foobarbazqux()
  }
}

impl Injectable for Foo {
  type Deps = (Arc<Bar>,);

  fn construct((bar,): Self::Deps) -> Self {
    Self::new(bar)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hands_out_the_bar_it_was_built_with() {
    let bar = Arc::new(Bar);
    let foo = Foo::new(Arc::clone(&bar));

    assert!(Arc::ptr_eq(&foo.bar(), &bar));
    assert_eq!(foo.bar().foobarzip(), "foobarzip");
  }

  #[test]
  fn delegates_to_bar() {
    let foo = Foo::construct((Arc::new(Bar),));
    assert_eq!(foo.foobarbazqux_from_bar(), "foobarbazqux");
  }
}
