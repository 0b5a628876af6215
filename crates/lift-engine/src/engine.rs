//! The `Engine` struct and its pop-and-resume loop.

use log::info;

use lift_core::{SimClock, SimRng, SimTime, SimulationConfig};

use crate::{
    DemandGenerator, Elevator, EngineResult, EventQueue, LabeledSnapshot, ProcessId,
};

/// Outcome of a single scheduler step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// A process was resumed; the clock may have advanced.
    Advanced,
    /// The earliest pending event lies beyond the horizon; the run is over
    /// and work in flight is abandoned.
    HorizonReached,
}

/// The cooperative scheduler hosting the elevator and the demand generator.
///
/// Both processes are registered at construction — elevator first, so
/// simultaneous events always resume it first — and scheduled at time zero.
/// Neither ever terminates; the run ends only when the next event would
/// pass the horizon.
pub struct Engine {
    clock:    SimClock,
    queue:    EventQueue,
    elevator: Elevator,
    demand:   DemandGenerator,
    rng:      SimRng,
    horizon:  SimTime,
    records:  Vec<LabeledSnapshot>,
}

impl Engine {
    /// Validate the configuration and wire up a ready-to-run engine.
    pub fn new(config: &SimulationConfig) -> EngineResult<Self> {
        config.validate()?;
        let floors = config.floor_set()?;

        let mut queue = EventQueue::new();
        queue.push(SimTime::ZERO, ProcessId::Elevator);
        queue.push(SimTime::ZERO, ProcessId::Demand);

        Ok(Self {
            clock:    config.make_clock(),
            queue,
            elevator: Elevator::new(config, floors),
            demand:   DemandGenerator::new(config, floors),
            rng:      SimRng::new(config.seed),
            horizon:  config.horizon(),
            records:  Vec::new(),
        })
    }

    /// Pop the earliest pending event and resume its process.
    ///
    /// Returns [`Step::HorizonReached`] once the earliest event lies past
    /// the horizon; the event is dropped, not rescheduled — a process
    /// blocked past the horizon is simply never resumed.
    pub fn step(&mut self) -> EngineResult<Step> {
        let Some((time, process)) = self.queue.pop_earliest() else {
            return Ok(Step::HorizonReached);
        };
        if time > self.horizon {
            return Ok(Step::HorizonReached);
        }

        self.clock.advance_to(time);
        let delay = match process {
            ProcessId::Elevator => self.elevator.resume(time),
            ProcessId::Demand => {
                self.demand
                    .resume(time, &mut self.elevator, &mut self.rng, &mut self.records)?
            }
        };
        self.queue.push(time.offset(delay), process);

        Ok(Step::Advanced)
    }

    /// Run the scheduler until the horizon.
    pub fn run(&mut self) -> EngineResult<()> {
        while self.step()? == Step::Advanced {}
        info!(
            "run complete at t={}: {} requests, {} labeled records",
            self.clock.now,
            self.demand.events().len(),
            self.records.len()
        );
        Ok(())
    }

    /// Move the finalized records produced since the last drain out of the
    /// engine.
    pub fn drain_records(&mut self) -> Vec<LabeledSnapshot> {
        std::mem::take(&mut self.records)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    #[inline]
    pub fn demand(&self) -> &DemandGenerator {
        &self.demand
    }

    #[inline]
    pub fn horizon(&self) -> SimTime {
        self.horizon
    }
}
