//! The `TrainingStore` trait implemented by all backends.

use crate::{RequestId, RequestRecord, SimulationId, SimulationRecord, StoreResult};

/// The persistence collaborator's contract, as seen from the simulation.
///
/// One `create_simulation` call per run, before any records; the returned
/// id stamps every subsequent `create_request`.  Backends range from the
/// reference HTTP service to local files — the simulation does not care.
pub trait TrainingStore {
    /// Persist run metadata and return the assigned simulation id.
    fn create_simulation(&mut self, record: &SimulationRecord) -> StoreResult<SimulationId>;

    /// Persist one labeled request record and return its id.
    fn create_request(&mut self, record: &RequestRecord) -> StoreResult<RequestId>;

    /// Flush and close whatever the backend holds open.
    ///
    /// Idempotent — safe to call more than once.  The default is a no-op
    /// for backends with nothing to flush.
    fn finish(&mut self) -> StoreResult<()> {
        Ok(())
    }
}
