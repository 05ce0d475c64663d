//! The global IoC container instance and access functions.

use crate::container::Container;
use once_cell::sync::Lazy;

// Created on first access. Bindings go in during bootstrap and stay for the
// life of the process.
static GLOBAL_CONTAINER: Lazy<Container> = Lazy::new(Container::default);

/// Provides a reference to the global container instance.
///
/// # Examples
///
/// ```
/// use tether_ioc::global;
///
/// fn register_services() {
///   global().add_instance(String::from("Hello from global!"));
/// }
/// # register_services();
/// ```
pub fn global() -> &'static Container {
  &GLOBAL_CONTAINER
}
