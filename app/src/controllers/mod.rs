//! Controllers, each built by the container from its declared dependencies.

mod foo1;
mod foobarzip;
mod magic_number;

pub use foo1::Foo1;
pub use foobarzip::Foobarzip;
pub use magic_number::MagicNumber;
