//! Seedable random source for target selection.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Random number generator for drawing targets.
///
/// Wraps ChaCha8Rng so a round can be replayed from its seed.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Creates a generator from an explicit seed.
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator with a random seed.
    #[instrument]
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        debug!(seed, "Seeded from entropy");
        Self::new(seed)
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a target uniformly from `[1, max_range]`.
    ///
    /// Returns 1 when `max_range` is 0.
    pub fn roll_target(&mut self, max_range: u32) -> u32 {
        if max_range == 0 {
            return 1;
        }
        self.rng.gen_range(1..=max_range)
    }
}
