//! The elevator agent — a cooperative process serving queued floor requests.
//!
//! # Resume-point state machine
//!
//! The agent runs an infinite service loop with three suspension points:
//! travel, the post-arrival hold, and the idle re-check.  Instead of a
//! coroutine, the loop is an explicit state machine: [`Phase`] records where
//! the loop will continue when the scheduler resumes it, and
//! [`Elevator::resume`] executes until it reaches the next suspension point,
//! returning how long to suspend.
//!
//! Exactly one of "queue non-empty", "moving", or "idle with a pending
//! snapshot" describes the agent at any instant.

use std::collections::VecDeque;

use log::debug;

use lift_core::{Floor, FloorSet, SimTime, SimulationConfig};
use lift_features::{DemandHistogram, extract};

use crate::{EngineError, EngineResult, LabeledSnapshot, PendingSnapshot};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Where the service loop continues on the next resume.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    /// Top of the loop: pick the next task or fall back to the resting
    /// policy.
    NextTask,
    /// Travel to `target` has completed; arrival bookkeeping and the hold
    /// are due.
    Arrive { target: Floor },
    /// The post-arrival hold has elapsed.
    HoldDone,
    /// Travel toward the base floor has completed (no hold afterwards).
    AtBase { target: Floor },
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// Elevator state plus the shared resources the demand generator writes:
/// the task queue, the cumulative demand histogram, and the pending
/// snapshot slot.  Single-threaded cooperative scheduling means only one
/// process touches them at a time, so plain `&mut` access suffices.
pub struct Elevator {
    floors:         FloorSet,
    speed:          f64,
    base_floor:     Option<Floor>,
    wait_time:      f64,
    check_interval: f64,

    current_floor: Floor,
    last_floor:    Option<Floor>,
    moving:        bool,
    idle_since:    Option<SimTime>,
    tasks:         VecDeque<Floor>,
    demand:        DemandHistogram,
    pending:       Option<PendingSnapshot>,
    phase:         Phase,
}

impl Elevator {
    /// Build an elevator parked at the base floor (or the lowest floor when
    /// the resting policy is disabled), with an empty queue and histogram.
    pub fn new(config: &SimulationConfig, floors: FloorSet) -> Self {
        let start_floor = config.base_floor.unwrap_or(floors.min());
        Self {
            speed:          config.speed,
            base_floor:     config.base_floor,
            wait_time:      config.wait_time,
            check_interval: config.check_interval,
            current_floor:  start_floor,
            last_floor:     None,
            moving:         false,
            idle_since:     None,
            tasks:          VecDeque::new(),
            demand:         DemandHistogram::new(floors),
            pending:        None,
            phase:          Phase::NextTask,
            floors,
        }
    }

    // ── Task queue (written by the demand generator) ──────────────────────

    /// Append a target floor to the task queue.
    ///
    /// Safe to call at any time, including mid-travel — it only affects
    /// future dequeues.  Rejects floors outside the served range.
    pub fn enqueue(&mut self, target: Floor) -> EngineResult<()> {
        if !self.floors.contains(target) {
            return Err(EngineError::InvalidFloor {
                floor:     target,
                floor_min: self.floors.min(),
                floor_max: self.floors.max(),
            });
        }
        self.tasks.push_back(target);
        Ok(())
    }

    /// Count one request originating at `origin` in the demand histogram.
    pub fn record_demand(&mut self, origin: Floor) {
        self.demand.record(origin);
    }

    // ── Pending snapshot (finalized by the demand generator) ──────────────

    pub fn has_pending_snapshot(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending snapshot and label it with the origin of the
    /// arriving request.
    ///
    /// Failing here means a demand event observed two pending-less states
    /// in a row — a scheduling-order bug, surfaced hard rather than
    /// skipped.
    pub fn finalize_snapshot(&mut self, label: Floor) -> EngineResult<LabeledSnapshot> {
        let pending = self.pending.take().ok_or(EngineError::NoPendingSnapshot)?;
        Ok(pending.finalize(label))
    }

    // ── Cooperative loop ──────────────────────────────────────────────────

    /// Run from the current resume point to the next suspension point.
    ///
    /// Returns the suspension duration in seconds; the scheduler resumes
    /// the agent again once that much virtual time has passed.
    pub fn resume(&mut self, now: SimTime) -> f64 {
        loop {
            match self.phase {
                Phase::NextTask => {
                    if let Some(target) = self.tasks.pop_front() {
                        self.idle_since = None;
                        let travel = self.travel_time(target);
                        if travel == 0.0 {
                            // Already at the target: no move, straight to
                            // the hold.
                            debug!("[{now}] elevator already at floor {target}");
                            self.phase = Phase::HoldDone;
                            return self.wait_time;
                        }
                        debug!(
                            "[{now}] elevator starting move from {} to {target}",
                            self.current_floor
                        );
                        self.moving = true;
                        self.phase = Phase::Arrive { target };
                        return travel;
                    }
                    match self.base_floor {
                        Some(base) if base != self.current_floor => {
                            debug!("[{now}] elevator vacant, heading to floor {base}");
                            self.moving = true;
                            self.phase = Phase::AtBase { target: base };
                            return self.travel_time(base);
                        }
                        _ => {
                            self.capture_snapshot(now);
                            return self.check_interval;
                        }
                    }
                }
                Phase::Arrive { target } => {
                    self.complete_move(now, target);
                    self.phase = Phase::HoldDone;
                    return self.wait_time;
                }
                Phase::HoldDone => {
                    self.phase = Phase::NextTask;
                }
                Phase::AtBase { target } => {
                    // No hold after parking; a task that arrived mid-seek
                    // is served immediately.
                    self.complete_move(now, target);
                    self.phase = Phase::NextTask;
                }
            }
        }
    }

    fn complete_move(&mut self, now: SimTime, target: Floor) {
        debug!("[{now}] elevator arrived at floor {target}");
        self.last_floor = Some(self.current_floor);
        self.current_floor = target;
        self.moving = false;
    }

    /// Capture an idle observation, replacing any pending one.
    ///
    /// `idle_since` is set only on the first idle observation since the
    /// last task, so `time_idle` keeps growing across re-checks while the
    /// snapshot itself is refreshed each time.
    fn capture_snapshot(&mut self, now: SimTime) {
        let idle_since = *self.idle_since.get_or_insert(now);
        self.pending = Some(PendingSnapshot {
            current_floor: self.current_floor,
            last_floor:    self.last_floor.unwrap_or(self.current_floor),
            time_idle:     now.since(idle_since),
            captured_at:   now,
            floor_demand:  self.demand.counts().to_vec(),
            features:      extract(&self.demand, self.current_floor),
        });
    }

    fn travel_time(&self, target: Floor) -> f64 {
        (self.current_floor - target).abs() as f64 / self.speed
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    /// Floor vacated by the most recent completed move, or `None` before
    /// any move.
    #[inline]
    pub fn last_floor(&self) -> Option<Floor> {
        self.last_floor
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// When the current idle period began, if the agent is idle.
    #[inline]
    pub fn idle_since(&self) -> Option<SimTime> {
        self.idle_since
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.tasks.len()
    }

    /// Queued target floors in service order.
    pub fn queued_tasks(&self) -> impl Iterator<Item = Floor> + '_ {
        self.tasks.iter().copied()
    }

    #[inline]
    pub fn demand(&self) -> &DemandHistogram {
        &self.demand
    }

    #[inline]
    pub fn pending_snapshot(&self) -> Option<&PendingSnapshot> {
        self.pending.as_ref()
    }

    #[inline]
    pub fn floors(&self) -> &FloorSet {
        &self.floors
    }
}
