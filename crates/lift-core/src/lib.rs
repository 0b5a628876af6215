//! `lift-core` — foundational types for the `rust_lift` elevator demand
//! simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (`rand`, `ordered-float`,
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`floors`]   | `Floor`, `FloorSet`                               |
//! | [`time`]     | `SimTime`, `SimClock`                             |
//! | [`rng`]      | `SimRng` (seed-once deterministic RNG)            |
//! | [`sampling`] | Exponential gaps, weighted floor choice           |
//! | [`config`]   | `SimulationConfig` and its validation             |
//! | [`error`]    | `CoreError`, `CoreResult`                         |

pub mod config;
pub mod error;
pub mod floors;
pub mod rng;
pub mod sampling;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimulationConfig;
pub use error::{CoreError, CoreResult};
pub use floors::{Floor, FloorSet};
pub use rng::SimRng;
pub use sampling::{exponential_gap, weighted_floor_choice};
pub use time::{SimClock, SimTime};
