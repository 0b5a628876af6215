//! `lift-sim` — the run controller for the `rust_lift` elevator demand
//! simulator.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimulationConfig;
//! use lift_sim::Simulation;
//! use lift_store::MemoryStore;
//!
//! let mut sim = Simulation::new(config)?;
//! let mut store = MemoryStore::new();
//! let summary = sim.run(&mut store)?;
//! println!("{summary}");
//! ```

pub mod controller;
pub mod error;
pub mod summary;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use controller::Simulation;
pub use error::{SimError, SimResult};
pub use summary::RunSummary;
