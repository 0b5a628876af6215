//! The `Simulation` controller.

use log::{info, warn};

use lift_core::SimulationConfig;
use lift_engine::{Engine, Step};
use lift_store::{RequestRecord, SimulationId, SimulationRecord, TrainingStore};

use crate::{RunSummary, SimResult};

/// Owns one run: the validated configuration and the engine built from it.
///
/// Construction validates everything and seeds the sampler exactly once;
/// [`run`][Self::run] registers the metadata with the store (the assigned
/// id stamps every record), drives the scheduler to the horizon, and
/// submits finalized records as they appear.
pub struct Simulation {
    config:        SimulationConfig,
    engine:        Engine,
    simulation_id: Option<SimulationId>,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        let engine = Engine::new(&config)?;
        Ok(Self {
            config,
            engine,
            simulation_id: None,
        })
    }

    /// Execute the run against `store`.
    ///
    /// Metadata submission failure aborts the run — without the assigned
    /// id no record can be stored.  Individual record failures are logged
    /// and counted; the simulation keeps going.
    pub fn run<S: TrainingStore>(&mut self, store: &mut S) -> SimResult<RunSummary> {
        let metadata = SimulationRecord::from_config(&self.config);
        let simulation_id = store.create_simulation(&metadata)?;
        self.simulation_id = Some(simulation_id);
        info!("registered run as {simulation_id}");

        let mut submitted = 0usize;
        let mut failed = 0usize;
        while self.engine.step()? == Step::Advanced {
            for snapshot in self.engine.drain_records() {
                let record = RequestRecord::from_snapshot(
                    simulation_id,
                    self.config.start_unix_secs,
                    &snapshot,
                );
                match store.create_request(&record) {
                    Ok(_) => submitted += 1,
                    Err(e) => {
                        warn!("failed to store request record: {e}");
                        failed += 1;
                    }
                }
            }
        }
        store.finish()?;

        Ok(RunSummary {
            simulation_id,
            demand_events: self.engine.demand().events().len(),
            records_submitted: submitted,
            records_failed: failed,
            final_time: self.engine.clock().now,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The id the store assigned, once [`run`][Self::run] has registered
    /// the metadata.
    #[inline]
    pub fn simulation_id(&self) -> Option<SimulationId> {
        self.simulation_id
    }

    #[inline]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
