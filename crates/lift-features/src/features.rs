//! Histogram-derived demand features.
//!
//! All three features are undefined until the first request has been
//! recorded, hence the `Option` fields — training records carry nulls for
//! the cold-start rows rather than a fabricated zero.

use lift_core::Floor;

use crate::DemandHistogram;

/// The demand features captured alongside an idle observation.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FeatureVector {
    /// Demand-weighted mean floor (center of mass of requests).
    pub mean_requested_floor: Option<f64>,
    /// Shannon entropy of the per-floor demand distribution, in bits,
    /// rounded to 3 decimal places.  `0` means all demand comes from a
    /// single floor; the maximum is `log2(floor_count)`.
    pub requests_entropy: Option<f64>,
    /// `|current_floor − mean_requested_floor|`.
    pub distance_to_center_of_mass: Option<f64>,
}

/// Compute every feature for the given histogram and elevator position.
pub fn extract(histogram: &DemandHistogram, current_floor: Floor) -> FeatureVector {
    FeatureVector {
        mean_requested_floor:        mean_requested_floor(histogram),
        requests_entropy:            requests_entropy(histogram),
        distance_to_center_of_mass:  distance_to_center_of_mass(histogram, current_floor),
    }
}

/// `Σ(floor · count) / Σ(count)`, or `None` for an empty histogram.
pub fn mean_requested_floor(histogram: &DemandHistogram) -> Option<f64> {
    let total = histogram.total();
    if total == 0 {
        return None;
    }
    let weighted: f64 = histogram
        .iter()
        .map(|(floor, count)| floor as f64 * count as f64)
        .sum();
    Some(weighted / total as f64)
}

/// `−Σ p·log2(p)` over floors with non-zero demand, rounded to 3 decimal
/// places, or `None` for an empty histogram.
pub fn requests_entropy(histogram: &DemandHistogram) -> Option<f64> {
    let total = histogram.total();
    if total == 0 {
        return None;
    }
    let entropy: f64 = histogram
        .counts()
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total as f64;
            -p * p.log2()
        })
        .sum();
    Some(round3(entropy))
}

/// `|current_floor − mean|`, or `None` while the mean is undefined.
pub fn distance_to_center_of_mass(
    histogram:     &DemandHistogram,
    current_floor: Floor,
) -> Option<f64> {
    mean_requested_floor(histogram).map(|mean| (current_floor as f64 - mean).abs())
}

#[inline]
fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
