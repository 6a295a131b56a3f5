//! Shared pseudo-random source for placeholder scores and detail-view flavor content.
//!
//! Seeded from `RANDOM_SEED` when set so that runs (and tests) can be reproduced;
//! otherwise seeded from OS entropy.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct RandomSource {
    rng: Mutex<StdRng>,
}

impl RandomSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn from_config(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Runs `f` with exclusive access to the generator.
    pub fn with<R>(&self, f: impl FnOnce(&mut StdRng) -> R) -> R {
        let mut rng = self.rng.lock();
        f(&mut rng)
    }
}
