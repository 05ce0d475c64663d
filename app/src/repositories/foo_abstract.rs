use tether_ioc::Injectable;

/// The abstract repository `Foo1` is written against.
pub trait FooAbstract: Send + Sync {
  fn index(&self) -> String;
}

/// The one implementation registered for [`FooAbstract`].
#[derive(Debug, Default)]
pub struct FooConcrete1;

impl FooAbstract for FooConcrete1 {
  fn index(&self) -> String {
    "index@FooConcrete1".to_string()
  }
}

impl Injectable for FooConcrete1 {
  type Deps = ();

  fn construct(_: ()) -> Self {
    FooConcrete1
  }
}
