//! Deterministic random number generation for agents and game drivers.
//!
//! Same seed, same sequence. Forking derives an independent but reproducible
//! stream, so each agent in a seeded match gets its own RNG without the two
//! sequences interfering.
//!
//! ```
//! use river_stones::core::GameRng;
//!
//! let mut root = GameRng::new(42);
//! let mut circle = root.fork();
//! let mut square = root.fork();
//! assert_ne!(circle.seed(), square.seed());
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(again.fork().seed(), circle.seed());
//! # let _ = (circle.gen_range_usize(0..10), square.gen_range_usize(0..10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic ChaCha8 RNG with forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent stream.
    ///
    /// The n-th fork of a given seed is always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Random usize in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniformly chosen element, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
