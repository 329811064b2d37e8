//! Seeded randomness for automated seats.
//!
//! The rules are deterministic; randomness only enters through strategies
//! picking targets and running playouts.
//!
//! ```
//! use hex_territory::core::GameRng;
//!
//! let mut seat = GameRng::new(42);
//! let mut playout = seat.fork();
//!
//! // The first fork of seed 42 is always the same stream
//! let mut again = GameRng::new(42).fork();
//! assert_eq!(playout.gen_range_usize(0..6), again.gen_range_usize(0..6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded move picker for automated seats.
///
/// ChaCha8 keeps a seat's choices reproducible for a given `--seed`.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Derive the RNG for one playout.
    ///
    /// The n-th fork of a seed is always the same stream, so rollout
    /// decisions replay exactly.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Uniform index in `range`, e.g. into a movable set.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
