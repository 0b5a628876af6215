//! Stochastic demand sampling: interarrival gaps and weighted floor choice.
//!
//! Pure functions over a caller-supplied [`SimRng`] — no hidden state, so
//! draw order alone determines the sequence a given seed produces.

use rand::distributions::{Distribution, WeightedIndex};

use crate::{CoreError, CoreResult, Floor, FloorSet, SimRng};

/// Sample the gap to the next arrival from `Exponential(rate)`.
///
/// Inverse-CDF transform: `Δt = −ln(1 − U) / rate` with `U` uniform in
/// `[0, 1)`, so the log argument stays in `(0, 1]` and the gap is always
/// finite and non-negative.
pub fn exponential_gap(rng: &mut SimRng, rate: f64) -> f64 {
    debug_assert!(rate > 0.0);
    -(1.0 - rng.uniform()).ln() / rate
}

/// Choose a floor from `floors`, weighting `base_floor` by `base_weight`
/// and every other floor by 1.
///
/// `exclude` removes one floor from the candidates — used when drawing a
/// destination so it can never equal the origin.  Fails only on degenerate
/// weights, which configuration validation rules out up front.
pub fn weighted_floor_choice(
    rng:         &mut SimRng,
    floors:      &FloorSet,
    base_floor:  Option<Floor>,
    base_weight: f64,
    exclude:     Option<Floor>,
) -> CoreResult<Floor> {
    let candidates: Vec<Floor> = floors
        .iter()
        .filter(|&f| Some(f) != exclude)
        .collect();

    let weights = candidates
        .iter()
        .map(|&f| if Some(f) == base_floor { base_weight } else { 1.0 });

    let dist = WeightedIndex::new(weights)
        .map_err(|e| CoreError::Config(format!("degenerate floor weights: {e}")))?;

    Ok(candidates[dist.sample(rng.inner())])
}
