//! Deterministic simulation-level RNG wrapper.
//!
//! The simulator itself is deterministic; randomness only enters through
//! traffic generation.  Every random stream is derived from one seed so a
//! run can be replayed exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for traffic generation and other global random streams.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
