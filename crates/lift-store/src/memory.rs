//! In-memory backend, for tests and dry runs.

use crate::store::TrainingStore;
use crate::{RequestId, RequestRecord, SimulationId, SimulationRecord, StoreResult};

/// Stores everything in vectors; ids are 1-based positions.
#[derive(Default)]
pub struct MemoryStore {
    simulations: Vec<SimulationRecord>,
    requests:    Vec<RequestRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn simulations(&self) -> &[SimulationRecord] {
        &self.simulations
    }

    pub fn requests(&self) -> &[RequestRecord] {
        &self.requests
    }
}

impl TrainingStore for MemoryStore {
    fn create_simulation(&mut self, record: &SimulationRecord) -> StoreResult<SimulationId> {
        self.simulations.push(record.clone());
        Ok(SimulationId(self.simulations.len() as u64))
    }

    fn create_request(&mut self, record: &RequestRecord) -> StoreResult<RequestId> {
        self.requests.push(record.clone());
        Ok(RequestId(self.requests.len() as u64))
    }
}
