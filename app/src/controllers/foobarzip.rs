use crate::repositories::{Baz, Foo};
use crate::routes::Request;
use std::sync::Arc;
use tether_ioc::Injectable;

/// Strings helpers together: `Foobarzip` needs `Foo`, which needs `Bar`.
#[derive(Debug)]
pub struct Foobarzip {
  foo: Arc<Foo>,
}

impl Foobarzip {
  /// Reaches `Bar` through `Foo` and asks it directly.
  pub fn index(&self) -> String {
    self.foo.bar().foobarzip().to_string()
  }

  /// Lets `Foo` ask `Bar` on our behalf.
  pub fn index2(&self) -> String {
    self.foo.foobarbazqux_from_bar().to_string()
  }

  /// Method injection: every parameter, the controller included, is filled in
  /// by `Container::invoke`. `baz` is never a constructor dependency.
  pub fn index3(self: Arc<Self>, request: Arc<Request>, baz: Arc<Baz>) -> String {
    format!("{} ({})", baz.hello(), request.path)
  }
}

impl Injectable for Foobarzip {
  type Deps = (Arc<Foo>,);

  fn construct((foo,): Self::Deps) -> Self {
    Self { foo }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::repositories::Bar;

  fn controller() -> Foobarzip {
    Foobarzip::construct((Arc::new(Foo::new(Arc::new(Bar))),))
  }

  #[test]
  fn index_goes_through_foo_to_bar() {
    assert_eq!(controller().index(), "foobarzip");
    assert_eq!(controller().index2(), "foobarbazqux");
  }

  #[test]
  fn index3_mentions_baz_and_path() {
    let body = Arc::new(controller()).index3(Arc::new(Request::get("/zip")), Arc::new(Baz));
    assert!(body.contains("Hello from baz"));
    assert!(body.contains("/zip"));
  }
}
