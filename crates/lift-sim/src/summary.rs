//! Plain summary of a completed run.

use std::fmt;

use lift_core::SimTime;
use lift_store::SimulationId;

/// What a run produced, for logging and CLI output.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Identifier the store assigned to this run's metadata.
    pub simulation_id: SimulationId,
    /// Demand events generated before the horizon.
    pub demand_events: usize,
    /// Labeled records accepted by the store.
    pub records_submitted: usize,
    /// Labeled records the store rejected (logged, not fatal).
    pub records_failed: usize,
    /// Clock value of the last resumed event.
    pub final_time: SimTime,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} requests, {} records stored ({} failed), ended at t={}s",
            self.simulation_id,
            self.demand_events,
            self.records_submitted,
            self.records_failed,
            self.final_time
        )
    }
}
