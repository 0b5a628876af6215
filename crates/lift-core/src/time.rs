//! Simulation time model.
//!
//! # Design
//!
//! Time is a continuous, monotonically non-decreasing number of simulated
//! seconds since the start of the run.  Interarrival gaps and travel times
//! are real-valued, so an integer tick counter would force a resolution
//! choice; instead `SimTime` wraps an [`OrderedFloat<f64>`] so it is totally
//! ordered and usable directly as a `BTreeMap` key in the event queue.
//!
//! The mapping to wall-clock time is held in `SimClock`:
//!
//!   wall_time = start_unix_secs + elapsed_secs
//!
//! Only the scheduler advances a `SimClock`, and only forwards.

use std::fmt;
use std::ops::Add;

use ordered_float::OrderedFloat;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute point on the simulation clock, in seconds from the run start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct SimTime(OrderedFloat<f64>);

impl SimTime {
    pub const ZERO: SimTime = SimTime(OrderedFloat(0.0));

    #[inline]
    pub fn from_secs(secs: f64) -> SimTime {
        SimTime(OrderedFloat(secs))
    }

    /// Seconds since the run start.
    #[inline]
    pub fn secs(self) -> f64 {
        self.0.into_inner()
    }

    /// The point `secs` seconds after `self`.
    #[inline]
    pub fn offset(self, secs: f64) -> SimTime {
        SimTime(OrderedFloat(self.0.into_inner() + secs))
    }

    /// Seconds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        debug_assert!(earlier <= self);
        self.0.into_inner() - earlier.0.into_inner()
    }
}

impl Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        self.offset(rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0.into_inner())
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current simulation time and converts it to Unix wall seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Unix timestamp (seconds since epoch) of simulation time zero.
    pub start_unix_secs: i64,
    /// The current simulation time — advanced only by the scheduler.
    pub now: SimTime,
}

impl SimClock {
    /// Create a clock at time zero, anchored at `start_unix_secs`.
    pub fn new(start_unix_secs: i64) -> Self {
        Self {
            start_unix_secs,
            now: SimTime::ZERO,
        }
    }

    /// Advance the clock to `time`.
    ///
    /// # Panics
    /// Panics in debug mode if `time` is earlier than the current time.
    #[inline]
    pub fn advance_to(&mut self, time: SimTime) {
        debug_assert!(time >= self.now);
        self.now = time;
    }

    /// Elapsed simulated seconds since time zero.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.now.secs()
    }

    /// Current Unix timestamp corresponding to `now`.
    #[inline]
    pub fn unix_secs(&self) -> f64 {
        self.unix_secs_at(self.now)
    }

    /// Unix timestamp corresponding to an arbitrary simulation time.
    #[inline]
    pub fn unix_secs_at(&self, time: SimTime) -> f64 {
        self.start_unix_secs as f64 + time.secs()
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}s", self.now)
    }
}
