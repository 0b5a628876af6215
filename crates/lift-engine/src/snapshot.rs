//! Idle-state snapshots and demand events.
//!
//! A snapshot is captured every time the elevator observes itself idle, but
//! it stays *pending* — label unset — until the next demand event arrives.
//! That event's origin floor becomes the label, because the training task is
//! "given this idle state, which floor will call next?".  Re-captures while
//! still idle overwrite the pending slot, so the finalized record always
//! describes the freshest idle observation before the arrival.

use lift_core::{Floor, SimTime};
use lift_features::FeatureVector;

// ── DemandEvent ───────────────────────────────────────────────────────────────

/// One passenger request: travel from `origin` to `destination`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DemandEvent {
    pub origin:       Floor,
    pub destination:  Floor,
    pub arrival_time: SimTime,
}

// ── Snapshots ─────────────────────────────────────────────────────────────────

/// An idle observation waiting for its label.
///
/// At most one exists per elevator; a fresh capture replaces any prior one.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSnapshot {
    /// Floor the elevator is parked at.
    pub current_floor: Floor,
    /// Floor vacated by the most recent completed move; the current floor
    /// before any move has completed.
    pub last_floor: Floor,
    /// Seconds the elevator has been idle at capture time.
    pub time_idle: f64,
    /// Simulation time of the capture.
    pub captured_at: SimTime,
    /// Cumulative demand counts, aligned to the served floor range.
    pub floor_demand: Vec<u64>,
    /// Histogram-derived features; all `None` before the first request.
    pub features: FeatureVector,
}

impl PendingSnapshot {
    /// Attach the label and produce the finished training record.
    pub fn finalize(self, next_floor_requested: Floor) -> LabeledSnapshot {
        LabeledSnapshot {
            current_floor: self.current_floor,
            last_floor:    self.last_floor,
            time_idle:     self.time_idle,
            captured_at:   self.captured_at,
            floor_demand:  self.floor_demand,
            features:      self.features,
            next_floor_requested,
        }
    }
}

/// A finalized training record: the captured idle state plus the origin of
/// the demand event that followed it.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledSnapshot {
    pub current_floor: Floor,
    pub last_floor:    Floor,
    pub time_idle:     f64,
    pub captured_at:   SimTime,
    pub floor_demand:  Vec<u64>,
    pub features:      FeatureVector,
    /// The label: origin floor of the next request after the capture.
    pub next_floor_requested: Floor,
}
