//! # Tether IoC
//!
//! A small, thread-safe Inversion of Control (IoC) container that resolves
//! dependencies by type.
//!
//! ## Core Concepts
//!
//! - **Capability**: the type a dependency is requested as. Abstract capabilities
//!   are trait objects (`dyn Repository`), concrete ones are plain types.
//! - **Binding**: a capability mapped to a provider (a factory, a concrete
//!   constructor, or a fixed instance) and a [`Scope`]. The last binding wins.
//! - **Constructor injection**: a provider declares its dependencies as a tuple of
//!   `Arc<_>` parameters. The container resolves them depth-first, left to right.
//! - **Autowiring**: concrete types implementing [`Injectable`] can resolve
//!   themselves with no binding at all once registered with
//!   [`Container::autowire`].
//! - **Contextual bindings**: `when::<Consumer>().needs::<dyn I>().give(..)`
//!   overrides the global binding for one consumer only.
//! - **Method injection**: [`Container::invoke`] resolves the parameters of any
//!   closure, taking caller-supplied [`Arguments`] first.
//!
//! Resolution failures are values, not panics: see [`Error`]. The [`resolve!`]
//! family of macros panics instead, for code that treats a missing binding as
//! a programming error.
//!
//! ## Quick Start
//!
//! ```
//! use tether_ioc::{Container, Injectable, Scope};
//! use std::sync::Arc;
//!
//! trait Greeter: Send + Sync {
//!   fn greet(&self) -> String;
//! }
//!
//! struct EnglishGreeter;
//! impl Greeter for EnglishGreeter {
//!   fn greet(&self) -> String {
//!     "Hello, World!".to_string()
//!   }
//! }
//! impl Injectable for EnglishGreeter {
//!   type Deps = ();
//!   fn construct(_: ()) -> Self {
//!     EnglishGreeter
//!   }
//! }
//!
//! struct Welcome {
//!   greeter: Arc<dyn Greeter>,
//! }
//! impl Injectable for Welcome {
//!   type Deps = (Arc<dyn Greeter>,);
//!   fn construct((greeter,): Self::Deps) -> Self {
//!     Welcome { greeter }
//!   }
//! }
//!
//! let container = Container::new();
//! container.bind_to::<dyn Greeter, EnglishGreeter>(Scope::Singleton, |g| g as Arc<dyn Greeter>);
//! container.autowire::<Welcome>();
//!
//! let welcome = container.get::<Welcome>(None).unwrap();
//! assert_eq!(welcome.greeter.greet(), "Hello, World!");
//! ```

mod container;
mod contextual;
mod core;
mod deps;
mod error;
mod global;
mod inflight;
mod invoke;
mod macros;
mod resolver;

pub use container::Container;
pub use contextual::{ContextualBindingBuilder, ContextualNeeds};
pub use core::{InjectionKey, Scope};
pub use deps::{Callable, Dependencies, Dependency, Factory, Injectable};
pub use error::{BoxError, Error, Result};
pub use global::global;
pub use invoke::Arguments;
pub use resolver::Resolver;
