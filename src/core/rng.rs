//! Deterministic deal shuffling.
//!
//! Same seed, same variant, same deal — required for "restart this deal",
//! for save files that store only the seed, and for reproducible tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used exclusively for shuffling the stock at deal time.
///
/// Uses ChaCha8 for speed while keeping the stream independent of platform
/// and stdlib hasher changes.
#[derive(Clone, Debug)]
pub struct DealRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DealRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
