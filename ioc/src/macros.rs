//! Public macros for ergonomic service resolution.

/// Resolves a service from the global container.
///
/// # Panics
///
/// Panics with the resolution error if the service cannot be resolved. Use
/// [`try_resolve!`] or `global().get(...)` for the fallible version.
///
/// # Examples
///
/// ```
/// use tether_ioc::{global, resolve};
///
/// global().add_singleton(|| String::from("hello"));
///
/// let message = resolve!(String);
/// assert_eq!(*message, "hello");
/// ```
///
/// ```
/// use tether_ioc::{global, resolve, Scope};
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync { fn greet(&self) -> String; }
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter { fn greet(&self) -> String { "Hello!".to_string() } }
///
/// global().bind::<dyn Greeter, _>(Scope::Singleton, || Arc::new(EnglishGreeter) as Arc<dyn Greeter>);
///
/// let greeter = resolve!(trait Greeter);
/// assert_eq!(greeter.greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! resolve {
    (trait $trait_path:path) => {
        $crate::resolve_from!($crate::global(), trait $trait_path)
    };
    (trait $trait_path:path, $name:expr) => {
        $crate::resolve_from!($crate::global(), trait $trait_path, $name)
    };
    ($type:ty) => {
        $crate::resolve_from!($crate::global(), $type)
    };
    ($type:ty, $name:expr) => {
        $crate::resolve_from!($crate::global(), $type, $name)
    };
}

/// Resolves a service from the global container, returning a `Result`.
#[macro_export]
macro_rules! try_resolve {
    (trait $trait_path:path) => {
        $crate::global().get::<dyn $trait_path>(None)
    };
    (trait $trait_path:path, $name:expr) => {
        $crate::global().get::<dyn $trait_path>(Some($name))
    };
    ($type:ty) => {
        $crate::global().get::<$type>(None)
    };
    ($type:ty, $name:expr) => {
        $crate::global().get::<$type>(Some($name))
    };
}

/// Resolves a service from the given container, panicking on failure.
#[macro_export]
macro_rules! resolve_from {
    ($container:expr, trait $trait_path:path) => {
        $container
            .get::<dyn $trait_path>(None)
            .unwrap_or_else(|e| panic!("Failed to resolve required trait service: {}", e))
    };
    ($container:expr, trait $trait_path:path, $name:expr) => {
        $container
            .get::<dyn $trait_path>(Some($name))
            .unwrap_or_else(|e| {
                panic!(
                    "Failed to resolve required trait service with name '{}': {}",
                    $name, e
                )
            })
    };
    ($container:expr, $type:ty) => {
        $container
            .get::<$type>(None)
            .unwrap_or_else(|e| panic!("Failed to resolve required service: {}", e))
    };
    ($container:expr, $type:ty, $name:expr) => {
        $container
            .get::<$type>(Some($name))
            .unwrap_or_else(|e| {
                panic!(
                    "Failed to resolve required service with name '{}': {}",
                    $name, e
                )
            })
    };
}

/// Resolves a service from the given container, returning a `Result`.
#[macro_export]
macro_rules! try_resolve_from {
    ($container:expr, trait $trait_path:path) => {
        $container.get::<dyn $trait_path>(None)
    };
    ($container:expr, trait $trait_path:path, $name:expr) => {
        $container.get::<dyn $trait_path>(Some($name))
    };
    ($container:expr, $type:ty) => {
        $container.get::<$type>(None)
    };
    ($container:expr, $type:ty, $name:expr) => {
        $container.get::<$type>(Some($name))
    };
}
