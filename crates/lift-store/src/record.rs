//! Wire records exchanged with the persistence collaborator.
//!
//! Field names match the collaborator's relational schema: one
//! `simulations` row per run (the full configuration, enough to reproduce
//! it) and one `elevator_requests` row per labeled idle observation.

use std::fmt;

use serde::{Deserialize, Serialize};

use lift_core::{Floor, SimulationConfig};
use lift_engine::LabeledSnapshot;

// ── Identifiers ───────────────────────────────────────────────────────────────

/// Identifier the collaborator assigns to a stored simulation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SimulationId(pub u64);

/// Identifier the collaborator assigns to a stored request record.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl fmt::Display for SimulationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "simulation {}", self.0)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request {}", self.0)
    }
}

// ── SimulationRecord ──────────────────────────────────────────────────────────

/// Metadata describing one simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub wait_time:         f64,
    pub elevator_speed:    f64,
    pub expo_lambda:       f64,
    pub start_unix_secs:   i64,
    pub duration:          f64,
    pub base_floor:        Option<Floor>,
    /// Meaningless without a base floor, so absent when that is disabled.
    pub base_floor_weight: Option<f64>,
    pub floor_min:         Floor,
    pub floor_max:         Floor,
    pub random_seed:       u64,
}

impl SimulationRecord {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            wait_time:         config.wait_time,
            elevator_speed:    config.speed,
            expo_lambda:       config.arrival_rate,
            start_unix_secs:   config.start_unix_secs,
            duration:          config.duration,
            base_floor:        config.base_floor,
            base_floor_weight: config.base_floor.map(|_| config.base_floor_weight),
            floor_min:         config.floor_min,
            floor_max:         config.floor_max,
            random_seed:       config.seed,
        }
    }
}

// ── RequestRecord ─────────────────────────────────────────────────────────────

/// One labeled training row: the elevator's idle state plus the origin of
/// the request that followed.  Only finalized snapshots are ever submitted,
/// so the label is always present; the derived features are null for rows
/// captured before the first request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub simulation_id:              SimulationId,
    pub current_floor:              Floor,
    pub last_floor:                 Floor,
    pub time_idle:                  f64,
    pub timestamp_unix_secs:        f64,
    pub floor_demand_histogram:     Vec<u64>,
    pub requests_entropy:           Option<f64>,
    pub mean_requested_floor:       Option<f64>,
    pub distance_to_center_of_mass: Option<f64>,
    pub next_floor_requested:       Floor,
}

impl RequestRecord {
    /// Stamp a finalized snapshot with its simulation id and convert the
    /// capture time to a wall-clock timestamp.
    pub fn from_snapshot(
        simulation_id:   SimulationId,
        start_unix_secs: i64,
        snapshot:        &LabeledSnapshot,
    ) -> Self {
        Self {
            simulation_id,
            current_floor:              snapshot.current_floor,
            last_floor:                 snapshot.last_floor,
            time_idle:                  snapshot.time_idle,
            timestamp_unix_secs:        start_unix_secs as f64 + snapshot.captured_at.secs(),
            floor_demand_histogram:     snapshot.floor_demand.clone(),
            requests_entropy:           snapshot.features.requests_entropy,
            mean_requested_floor:       snapshot.features.mean_requested_floor,
            distance_to_center_of_mass: snapshot.features.distance_to_center_of_mass,
            next_floor_requested:       snapshot.next_floor_requested,
        }
    }
}
