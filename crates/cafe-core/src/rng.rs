//! Deterministic simulation RNG.
//!
//! Only the spawner draws random numbers (arrival jitter and per-customer
//! patience), so a single seeded `SmallRng` is enough: the same seed always
//! reproduces the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.  Single-threaded use only.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent stream, e.g. one per spawner, so adding a
    /// consumer does not shift the numbers another one sees.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Uniform sample in `[-spread, spread]`; `0.0` when `spread <= 0`.
    pub fn jitter(&mut self, spread: f64) -> f64 {
        if spread > 0.0 && spread.is_finite() {
            self.0.gen_range(-spread..=spread)
        } else {
            0.0
        }
    }
}
