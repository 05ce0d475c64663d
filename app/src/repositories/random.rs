use rand::Rng;
use tether_ioc::Injectable;

pub const MAGIC_MIN: u32 = 0;
pub const MAGIC_MAX: u32 = 100;

pub trait RandomRepositoryInterface: Send + Sync {
  /// A number in `MAGIC_MIN..=MAGIC_MAX`.
  fn magic(&self) -> u32;
}

/// Draws from the thread-local generator on every call.
#[derive(Debug, Default)]
pub struct RandomRepository;

impl RandomRepositoryInterface for RandomRepository {
  fn magic(&self) -> u32 {
    rand::rng().random_range(MAGIC_MIN..=MAGIC_MAX)
  }
}

impl Injectable for RandomRepository {
  type Deps = ();

  fn construct(_: ()) -> Self {
    RandomRepository
  }
}
