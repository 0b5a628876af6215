//! CSV backend.
//!
//! Creates two files in the configured output directory:
//! - `simulations.csv`
//! - `elevator_requests.csv`
//!
//! Ids are assigned locally, starting at 1.  The per-floor histogram is a
//! single `;`-joined cell so the row width stays fixed regardless of the
//! floor range; absent features are empty cells.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::store::TrainingStore;
use crate::{RequestId, RequestRecord, SimulationId, SimulationRecord, StoreResult};

/// Writes training data to two CSV files.
pub struct CsvStore {
    simulations:     Writer<File>,
    requests:        Writer<File>,
    next_simulation: u64,
    next_request:    u64,
    finished:        bool,
}

impl CsvStore {
    /// Open (or create) the two CSV files in `dir` and write the headers.
    pub fn new(dir: &Path) -> StoreResult<Self> {
        let mut simulations = Writer::from_path(dir.join("simulations.csv"))?;
        simulations.write_record([
            "id",
            "wait_time",
            "elevator_speed",
            "expo_lambda",
            "start_unix_secs",
            "duration",
            "base_floor",
            "base_floor_weight",
            "floor_min",
            "floor_max",
            "random_seed",
        ])?;

        let mut requests = Writer::from_path(dir.join("elevator_requests.csv"))?;
        requests.write_record([
            "id",
            "simulation_id",
            "current_floor",
            "last_floor",
            "time_idle",
            "timestamp_unix_secs",
            "floor_demand_histogram",
            "requests_entropy",
            "mean_requested_floor",
            "distance_to_center_of_mass",
            "next_floor_requested",
        ])?;

        Ok(Self {
            simulations,
            requests,
            next_simulation: 1,
            next_request: 1,
            finished: false,
        })
    }
}

fn optional(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn histogram_cell(counts: &[u64]) -> String {
    counts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

impl TrainingStore for CsvStore {
    fn create_simulation(&mut self, record: &SimulationRecord) -> StoreResult<SimulationId> {
        let id = self.next_simulation;
        self.next_simulation += 1;
        self.simulations.write_record(&[
            id.to_string(),
            record.wait_time.to_string(),
            record.elevator_speed.to_string(),
            record.expo_lambda.to_string(),
            record.start_unix_secs.to_string(),
            record.duration.to_string(),
            optional(record.base_floor),
            optional(record.base_floor_weight),
            record.floor_min.to_string(),
            record.floor_max.to_string(),
            record.random_seed.to_string(),
        ])?;
        Ok(SimulationId(id))
    }

    fn create_request(&mut self, record: &RequestRecord) -> StoreResult<RequestId> {
        let id = self.next_request;
        self.next_request += 1;
        self.requests.write_record(&[
            id.to_string(),
            record.simulation_id.0.to_string(),
            record.current_floor.to_string(),
            record.last_floor.to_string(),
            record.time_idle.to_string(),
            record.timestamp_unix_secs.to_string(),
            histogram_cell(&record.floor_demand_histogram),
            optional(record.requests_entropy),
            optional(record.mean_requested_floor),
            optional(record.distance_to_center_of_mass),
            record.next_floor_requested.to_string(),
        ])?;
        Ok(RequestId(id))
    }

    fn finish(&mut self) -> StoreResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.simulations.flush()?;
        self.requests.flush()?;
        Ok(())
    }
}
