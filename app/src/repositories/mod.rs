//! Helper objects the controllers depend on.

mod bar;
mod baz;
mod foo;
mod foo_abstract;
mod random;

pub use bar::Bar;
pub use baz::Baz;
pub use foo::Foo;
pub use foo_abstract::{FooAbstract, FooConcrete1};
pub use random::{RandomRepository, RandomRepositoryInterface, MAGIC_MAX, MAGIC_MIN};
