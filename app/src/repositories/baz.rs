use tether_ioc::Injectable;

/// Only ever injected into a single handler method, never a constructor.
#[derive(Debug, Default)]
pub struct Baz;

impl Baz {
  pub fn hello(&self) -> &'static str {
    "Hello from baz"
  }
}

impl Injectable for Baz {
  type Deps = ();

  fn construct(_: ()) -> Self {
    Baz
  }
}
