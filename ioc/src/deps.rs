//! Declarative dependency lists.
//!
//! A provider never inspects its constructor at runtime. Instead its parameter
//! list is a tuple of [`Dependency`] values, and the tuple type itself is the
//! manifest: [`Dependencies::keys`] lists the capabilities in declared order and
//! [`Dependencies::resolve`] fetches them left to right.

use crate::core::InjectionKey;
use crate::error::{Error, Result};
use crate::resolver::Resolver;
use std::any::Any;
use std::sync::Arc;

/// A single injectable parameter.
pub trait Dependency: Sized {
  /// The capability this parameter asks for.
  fn key() -> InjectionKey;

  fn fetch(resolver: &Resolver<'_>) -> Result<Self>;
}

impl<T: ?Sized + Any + Send + Sync> Dependency for Arc<T> {
  fn key() -> InjectionKey {
    InjectionKey::of::<T>()
  }

  fn fetch(resolver: &Resolver<'_>) -> Result<Self> {
    resolver.resolve::<T>()
  }
}

/// An optional parameter resolves to `None` when its own capability is unbound.
/// A missing capability deeper in its dependency chain is still an error.
impl<T: ?Sized + Any + Send + Sync> Dependency for Option<Arc<T>> {
  fn key() -> InjectionKey {
    InjectionKey::of::<T>()
  }

  fn fetch(resolver: &Resolver<'_>) -> Result<Self> {
    match resolver.resolve::<T>() {
      Ok(instance) => Ok(Some(instance)),
      Err(Error::UnboundCapability { key }) if key == Self::key() => Ok(None),
      Err(e) => Err(e),
    }
  }
}

/// An ordered list of dependencies, implemented for tuples of [`Dependency`].
pub trait Dependencies: Sized {
  fn keys() -> Vec<InjectionKey>;

  fn resolve(resolver: &Resolver<'_>) -> Result<Self>;
}

/// A concrete type that knows how to build itself from its dependencies.
///
/// Implementing it makes the type usable with [`Container::autowire`] and
/// [`Container::bind_to`].
///
/// [`Container::autowire`]: crate::Container::autowire
/// [`Container::bind_to`]: crate::Container::bind_to
///
/// ```
/// use std::sync::Arc;
/// use tether_ioc::Injectable;
///
/// struct Engine;
/// impl Injectable for Engine {
///   type Deps = ();
///   fn construct(_: ()) -> Self {
///     Engine
///   }
/// }
///
/// struct Car {
///   engine: Arc<Engine>,
/// }
/// impl Injectable for Car {
///   type Deps = (Arc<Engine>,);
///   fn construct((engine,): Self::Deps) -> Self {
///     Car { engine }
///   }
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
  type Deps: Dependencies;

  fn construct(deps: Self::Deps) -> Self;
}

/// A reusable provider function: any `Fn` whose parameters are dependencies.
pub trait Factory<D, T>: Send + Sync + 'static {
  fn make(&self, deps: D) -> T;
}

/// A one-shot callable whose parameters are dependencies, used by `invoke`.
pub trait Callable<D, R> {
  fn call(self, deps: D) -> R;
}

macro_rules! impl_for_arity {
  ($($ty:ident),*) => {
    impl<$($ty: Dependency),*> Dependencies for ($($ty,)*) {
      fn keys() -> Vec<InjectionKey> {
        vec![$($ty::key()),*]
      }

      #[allow(unused_variables)]
      fn resolve(resolver: &Resolver<'_>) -> Result<Self> {
        Ok(($($ty::fetch(resolver)?,)*))
      }
    }

    impl<Func, Out, $($ty),*> Factory<($($ty,)*), Out> for Func
    where
      Func: Fn($($ty),*) -> Out + Send + Sync + 'static,
    {
      #[allow(non_snake_case)]
      fn make(&self, ($($ty,)*): ($($ty,)*)) -> Out {
        (self)($($ty),*)
      }
    }

    impl<Func, Out, $($ty),*> Callable<($($ty,)*), Out> for Func
    where
      Func: FnOnce($($ty),*) -> Out,
    {
      #[allow(non_snake_case)]
      fn call(self, ($($ty,)*): ($($ty,)*)) -> Out {
        (self)($($ty),*)
      }
    }
  };
}

impl_for_arity!();
impl_for_arity!(A);
impl_for_arity!(A, B);
impl_for_arity!(A, B, C);
impl_for_arity!(A, B, C, D);
impl_for_arity!(A, B, C, D, E);
impl_for_arity!(A, B, C, D, E, F);
impl_for_arity!(A, B, C, D, E, F, G);
impl_for_arity!(A, B, C, D, E, F, G, H);
