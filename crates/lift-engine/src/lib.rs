//! `lift-engine` — the discrete-event core of the `rust_lift` elevator
//! demand simulator.
//!
//! # Cooperative scheduling
//!
//! Two logical processes share one virtual clock:
//!
//! - the **elevator agent** ([`Elevator`]) serves queued floor requests with
//!   constant-speed travel, a post-arrival hold, a seek-base resting policy,
//!   and idle polling that captures feature snapshots;
//! - the **demand generator** ([`DemandGenerator`]) emits Poisson-arriving
//!   origin/destination requests and labels the freshest idle snapshot with
//!   each new origin.
//!
//! Each process is an explicit state machine with a resume point; the
//! [`Engine`] pops the earliest entry from the [`EventQueue`], advances the
//! clock, resumes the owning process to its next suspension point, and
//! re-schedules it.  Everything is single-threaded and deterministic: same
//! seed and configuration, same run.

pub mod demand;
pub mod elevator;
pub mod engine;
pub mod error;
pub mod queue;
pub mod snapshot;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use demand::DemandGenerator;
pub use elevator::Elevator;
pub use engine::{Engine, Step};
pub use error::{EngineError, EngineResult};
pub use queue::{EventQueue, ProcessId};
pub use snapshot::{DemandEvent, LabeledSnapshot, PendingSnapshot};
