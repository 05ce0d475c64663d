use tether_ioc::Injectable;

/// The end of the helper chain: no dependencies, constant answers.
#[derive(Debug, Default)]
pub struct Bar;

impl Bar {
  pub fn foobarzip(&self) -> &'static str {
    "foobarzip"
  }

  pub fn foobarbazqux(&self) -> &'static str {
    "foobarbazqux"
  }
}

impl Injectable for Bar {
  type Deps = ();

  fn construct(_: ()) -> Self {
    Bar
  }
}
