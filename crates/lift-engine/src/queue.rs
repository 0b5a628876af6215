//! `EventQueue` — the pending-event set of the cooperative scheduler.
//!
//! # Why this exists
//!
//! Each cooperative process is suspended at exactly one point, waiting for
//! the clock to reach its resume time.  The scheduler repeatedly pops the
//! earliest entry, advances the clock, and resumes the owning process.
//!
//! Keys order by `(time, process, seq)`: simultaneous events resume in the
//! order their processes were registered, and `seq` — a monotonically
//! increasing push counter — keeps keys unique.  A `BTreeMap` gives an
//! ordered set with O(log n) push and pop; n is the number of registered
//! processes, so the constant is tiny.

use std::collections::BTreeMap;

use lift_core::SimTime;

// ── ProcessId ─────────────────────────────────────────────────────────────────

/// The cooperative processes driven by the scheduler, in registration order.
///
/// The discriminant order is the tie-break order: the elevator always
/// resumes before the demand generator when both are due at the same time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ProcessId {
    Elevator = 0,
    Demand   = 1,
}

// ── EventQueue ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct EventKey {
    time:    SimTime,
    process: ProcessId,
    seq:     u64,
}

/// Time-ordered set of pending process resumptions.
#[derive(Default)]
pub struct EventQueue {
    inner: BTreeMap<EventKey, ProcessId>,
    seq:   u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `process` to resume at `time`.
    pub fn push(&mut self, time: SimTime, process: ProcessId) {
        let key = EventKey { time, process, seq: self.seq };
        self.seq += 1;
        self.inner.insert(key, process);
    }

    /// Remove and return the earliest pending resumption.
    pub fn pop_earliest(&mut self) -> Option<(SimTime, ProcessId)> {
        self.inner
            .pop_first()
            .map(|(key, process)| (key.time, process))
    }

    /// The earliest pending resume time, or `None` if the set is empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|key| key.time)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
