//! The demand generator — a cooperative process emitting passenger requests.
//!
//! Each cycle: suspend for an exponentially distributed gap, then emit one
//! request.  Emission order matters and is fixed:
//!
//! 1. Sample `origin`, then `destination` (weighted choice, destination
//!    excludes the origin so the pair is always distinct).
//! 2. If an idle snapshot is pending, finalize it with `origin` as label —
//!    the record's label is always the origin of the first request after
//!    its capture.
//! 3. Count the origin in the demand histogram.  The finalized record was
//!    captured earlier, so it never includes the request that labels it.
//! 4. Enqueue `origin`, then `destination`: pickup before drop-off.

use log::debug;

use lift_core::{Floor, FloorSet, SimRng, SimTime, SimulationConfig};
use lift_core::{exponential_gap, weighted_floor_choice};

use crate::{DemandEvent, Elevator, EngineResult, LabeledSnapshot};

/// Where the generator loop continues on the next resume.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    /// First resume: sample the gap to the first arrival.
    Bootstrap,
    /// A gap has elapsed: emit a request and sample the next gap.
    Dispatch,
}

pub struct DemandGenerator {
    floors:            FloorSet,
    arrival_rate:      f64,
    base_floor:        Option<Floor>,
    base_floor_weight: f64,
    phase:             Phase,
    events:            Vec<DemandEvent>,
}

impl DemandGenerator {
    pub fn new(config: &SimulationConfig, floors: FloorSet) -> Self {
        Self {
            floors,
            arrival_rate:      config.arrival_rate,
            base_floor:        config.base_floor,
            base_floor_weight: config.base_floor_weight,
            phase:             Phase::Bootstrap,
            events:            Vec::new(),
        }
    }

    /// Every request emitted so far, in arrival order.
    pub fn events(&self) -> &[DemandEvent] {
        &self.events
    }

    /// Run one step of the generator loop.
    ///
    /// Finalized records are pushed onto `out`; the return value is the
    /// gap to the next arrival.
    pub fn resume(
        &mut self,
        now:      SimTime,
        elevator: &mut Elevator,
        rng:      &mut SimRng,
        out:      &mut Vec<LabeledSnapshot>,
    ) -> EngineResult<f64> {
        if self.phase == Phase::Bootstrap {
            self.phase = Phase::Dispatch;
            return Ok(exponential_gap(rng, self.arrival_rate));
        }

        let origin = self.sample_floor(rng, None)?;
        let destination = self.sample_floor(rng, Some(origin))?;

        if elevator.has_pending_snapshot() {
            out.push(elevator.finalize_snapshot(origin)?);
        }

        elevator.record_demand(origin);
        self.events.push(DemandEvent { origin, destination, arrival_time: now });
        debug!("[{now}] request from {origin} to {destination}");

        elevator.enqueue(origin)?;
        elevator.enqueue(destination)?;

        Ok(exponential_gap(rng, self.arrival_rate))
    }

    fn sample_floor(&self, rng: &mut SimRng, exclude: Option<Floor>) -> EngineResult<Floor> {
        Ok(weighted_floor_choice(
            rng,
            &self.floors,
            self.base_floor,
            self.base_floor_weight,
            exclude,
        )?)
    }
}
