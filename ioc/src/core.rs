//! Core, non-public data structures for the IoC container.

use crate::error::Result;
use crate::resolver::Resolver;
use once_cell::sync::OnceCell;
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-erased instance. It always holds an `Arc<T>` for the capability `T`
/// it was registered under, so `dyn Trait` capabilities can be stored too.
pub(crate) type Instance = Box<dyn Any + Send + Sync>;

pub(crate) type FactoryFn = Box<dyn Fn(&Resolver<'_>) -> Result<Instance> + Send + Sync>;

/// Identifies a capability: the type it is requested as, plus an optional name.
///
/// Equality and hashing only look at the `TypeId` and the name; the type name is
/// carried along for error messages and logs.
#[derive(Clone)]
pub struct InjectionKey {
  type_id: TypeId,
  type_name: &'static str,
  name: Option<String>,
}

impl InjectionKey {
  pub fn of<T: ?Sized + Any>() -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      type_name: std::any::type_name::<T>(),
      name: None,
    }
  }

  pub fn named<T: ?Sized + Any>(name: &str) -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      type_name: std::any::type_name::<T>(),
      name: Some(name.to_owned()),
    }
  }

  pub(crate) fn new<T: ?Sized + Any>(name: Option<&str>) -> Self {
    match name {
      Some(n) => Self::named::<T>(n),
      None => Self::of::<T>(),
    }
  }

  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }
}

impl PartialEq for InjectionKey {
  fn eq(&self, other: &Self) -> bool {
    self.type_id == other.type_id && self.name == other.name
  }
}

impl Eq for InjectionKey {}

impl Hash for InjectionKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.type_id.hash(state);
    self.name.hash(state);
  }
}

impl fmt::Debug for InjectionKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.name {
      Some(name) => write!(f, "Key({}, Name({}))", self.type_name, name),
      None => write!(f, "Key({})", self.type_name),
    }
  }
}

impl fmt::Display for InjectionKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.name {
      Some(name) => write!(f, "{} (named '{}')", self.type_name, name),
      None => f.write_str(self.type_name),
    }
  }
}

/// Lifetime policy of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
  /// A new instance for every resolution.
  #[default]
  Transient,
  /// One instance per binding, built on first resolution and owned by the container.
  Singleton,
}

impl fmt::Display for Scope {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Scope::Transient => f.write_str("transient"),
      Scope::Singleton => f.write_str("singleton"),
    }
  }
}

pub(crate) enum Provider {
  Instance {
    value: Instance,
  },
  Singleton {
    dependencies: Vec<InjectionKey>,
    concrete: Option<InjectionKey>,
    cell: OnceCell<Instance>,
    factory: FactoryFn,
  },
  Transient {
    dependencies: Vec<InjectionKey>,
    concrete: Option<InjectionKey>,
    factory: FactoryFn,
  },
}

impl Provider {
  pub(crate) fn instance(value: Instance) -> Self {
    Provider::Instance { value }
  }

  pub(crate) fn with_scope(scope: Scope, dependencies: Vec<InjectionKey>, factory: FactoryFn) -> Self {
    match scope {
      Scope::Singleton => Provider::Singleton {
        dependencies,
        concrete: None,
        cell: OnceCell::new(),
        factory,
      },
      Scope::Transient => Provider::Transient {
        dependencies,
        concrete: None,
        factory,
      },
    }
  }

  /// Marks the provider as running the constructor of `concrete`. That type,
  /// not the capability it is bound under, is the consumer its own
  /// dependencies are resolved for.
  pub(crate) fn constructed_as(mut self, key: InjectionKey) -> Self {
    match &mut self {
      Provider::Instance { .. } => {}
      Provider::Singleton { concrete, .. } | Provider::Transient { concrete, .. } => {
        *concrete = Some(key)
      }
    }
    self
  }

  pub(crate) fn concrete(&self) -> Option<&InjectionKey> {
    match self {
      Provider::Instance { .. } => None,
      Provider::Singleton { concrete, .. } | Provider::Transient { concrete, .. } => {
        concrete.as_ref()
      }
    }
  }

  pub(crate) fn scope(&self) -> Scope {
    match self {
      Provider::Instance { .. } | Provider::Singleton { .. } => Scope::Singleton,
      Provider::Transient { .. } => Scope::Transient,
    }
  }

  pub(crate) fn dependencies(&self) -> &[InjectionKey] {
    match self {
      Provider::Instance { .. } => &[],
      Provider::Singleton { dependencies, .. } | Provider::Transient { dependencies, .. } => {
        dependencies
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::collections::HashSet;

  trait Marker: Send + Sync {}

  #[test]
  fn keys_compare_by_type_and_name_only() {
    let a = InjectionKey::of::<String>();
    let b = InjectionKey::new::<String>(None);
    let named = InjectionKey::named::<String>("primary");

    assert_eq!(a, b);
    assert_ne!(a, named);
    assert_ne!(a, InjectionKey::of::<dyn Marker>());

    let set: HashSet<_> = [a.clone(), b, named.clone()].into_iter().collect();
    assert_eq!(set.len(), 2);
  }

  #[test]
  fn keys_display_type_and_name() {
    assert_eq!(InjectionKey::of::<u32>().to_string(), "u32");
    assert_eq!(
      InjectionKey::named::<u32>("port").to_string(),
      "u32 (named 'port')"
    );
    assert_eq!(format!("{:?}", InjectionKey::named::<u32>("port")), "Key(u32, Name(port))");
  }

  #[test]
  fn provider_reports_scope_and_dependencies() {
    let deps = vec![InjectionKey::of::<u8>(), InjectionKey::of::<u16>()];
    let factory: FactoryFn = Box::new(|_| Ok(Box::new(std::sync::Arc::new(1_u32))));
    let provider = Provider::with_scope(Scope::Singleton, deps.clone(), factory);

    assert_eq!(provider.scope(), Scope::Singleton);
    assert_eq!(provider.dependencies(), deps.as_slice());

    let instance = Provider::instance(Box::new(std::sync::Arc::new(7_u32)));
    assert_eq!(instance.scope(), Scope::Singleton);
    assert!(instance.dependencies().is_empty());
    assert!(instance.concrete().is_none());
  }

  #[test]
  fn constructor_providers_remember_their_concrete_type() {
    let factory: FactoryFn = Box::new(|_| Ok(Box::new(std::sync::Arc::new(1_u32))));
    let provider = Provider::with_scope(Scope::Transient, Vec::new(), factory)
      .constructed_as(InjectionKey::of::<u32>());

    assert_eq!(provider.concrete(), Some(&InjectionKey::of::<u32>()));
  }
}
