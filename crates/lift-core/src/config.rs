//! Top-level simulation configuration.

use crate::{CoreError, CoreResult, Floor, FloorSet, SimClock, SimTime};

/// Immutable configuration for a single simulation run.
///
/// Created once at startup and validated before anything is built; the run
/// loop never re-checks these values.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Lowest served floor.
    pub floor_min: Floor,
    /// Highest served floor (inclusive).  Must exceed `floor_min`.
    pub floor_max: Floor,
    /// Constant elevator speed in floors per second.  Must be positive.
    pub speed: f64,
    /// Mean request rate λ of the Poisson arrival process, in requests per
    /// second.  Must be positive.
    pub arrival_rate: f64,
    /// Street-level floor the elevator parks at when vacant.  `None`
    /// disables the seek-base resting policy: the elevator idles wherever
    /// it last stopped.
    pub base_floor: Option<Floor>,
    /// How many times more likely the base floor is to be requested than
    /// any other floor.  Must be at least 1.
    pub base_floor_weight: f64,
    /// Hold duration after arriving at a floor, in seconds.  Non-negative.
    pub wait_time: f64,
    /// How often a vacant elevator re-checks its task queue, in seconds.
    /// Must be positive.
    pub check_interval: f64,
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
    /// Unix timestamp (seconds since epoch) of simulation time zero.
    pub start_unix_secs: i64,
    /// Total simulated seconds.  Must be positive.
    pub duration: f64,
}

impl SimulationConfig {
    /// Check every value the samplers and the agent rely on.
    ///
    /// All violations are configuration errors: they surface here, at
    /// construction, never mid-run.
    pub fn validate(&self) -> CoreResult<()> {
        let floors = self.floor_set()?;

        if !(self.speed > 0.0 && self.speed.is_finite()) {
            return Err(CoreError::Config(format!(
                "elevator speed must be positive, got {}",
                self.speed
            )));
        }
        if !(self.arrival_rate > 0.0 && self.arrival_rate.is_finite()) {
            return Err(CoreError::Config(format!(
                "arrival rate must be positive, got {}",
                self.arrival_rate
            )));
        }
        if let Some(base) = self.base_floor {
            if !floors.contains(base) {
                return Err(CoreError::Config(format!(
                    "base floor {base} is outside {floors}"
                )));
            }
        }
        if !(self.base_floor_weight >= 1.0 && self.base_floor_weight.is_finite()) {
            return Err(CoreError::Config(format!(
                "base floor weight must be at least 1, got {}",
                self.base_floor_weight
            )));
        }
        if !(self.wait_time >= 0.0 && self.wait_time.is_finite()) {
            return Err(CoreError::Config(format!(
                "wait time must be non-negative, got {}",
                self.wait_time
            )));
        }
        if !(self.check_interval > 0.0 && self.check_interval.is_finite()) {
            return Err(CoreError::Config(format!(
                "check interval must be positive, got {}",
                self.check_interval
            )));
        }
        if !(self.duration > 0.0 && self.duration.is_finite()) {
            return Err(CoreError::Config(format!(
                "duration must be positive, got {}",
                self.duration
            )));
        }
        Ok(())
    }

    /// The served floor range.
    pub fn floor_set(&self) -> CoreResult<FloorSet> {
        FloorSet::new(self.floor_min, self.floor_max)
    }

    /// The simulation time at which the run ends.
    #[inline]
    pub fn horizon(&self) -> SimTime {
        SimTime::from_secs(self.duration)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_secs)
    }
}
