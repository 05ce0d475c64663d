use crate::repositories::RandomRepositoryInterface;
use std::sync::Arc;
use tether_ioc::Injectable;

/// Written against the interface only. Which generator it gets is up to the
/// container.
pub struct MagicNumber {
  generator: Arc<dyn RandomRepositoryInterface>,
}

impl MagicNumber {
  pub fn index(&self) -> u32 {
    self.generator.magic()
  }
}

impl Injectable for MagicNumber {
  type Deps = (Arc<dyn RandomRepositoryInterface>,);

  fn construct((generator,): Self::Deps) -> Self {
    Self { generator }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Fixed(u32);
  impl RandomRepositoryInterface for Fixed {
    fn magic(&self) -> u32 {
      self.0
    }
  }

  #[test]
  fn returns_whatever_the_generator_says() {
    let controller = MagicNumber::construct((Arc::new(Fixed(42)) as Arc<dyn RandomRepositoryInterface>,));
    assert_eq!(controller.index(), 42);
  }
}
