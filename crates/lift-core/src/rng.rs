//! Deterministic simulation-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each run owns exactly one `SimRng`, seeded once from the configured seed
//! at controller construction.  Every stochastic draw (interarrival gaps,
//! origin and destination floors) goes through this single instance in a
//! fixed order, so two runs with the same seed and configuration replay the
//! same sequence of events.  Two controllers in the same process never share
//! sampling state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level deterministic RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// A uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}
