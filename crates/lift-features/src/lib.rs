//! `lift-features` — demand histogram and feature extraction for the
//! `rust_lift` elevator demand simulator.
//!
//! The elevator agent captures a [`FeatureVector`] from its cumulative
//! [`DemandHistogram`] every time it observes itself idle; the feature
//! functions here are pure so they can be exercised directly against known
//! histograms.

pub mod features;
pub mod histogram;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use features::{
    FeatureVector, distance_to_center_of_mass, extract, mean_requested_floor, requests_entropy,
};
pub use histogram::DemandHistogram;
