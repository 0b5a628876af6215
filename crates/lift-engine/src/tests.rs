//! Unit and integration tests for lift-engine.

use lift_core::{SimRng, SimTime, SimulationConfig};

use crate::{Elevator, DemandGenerator, Engine, EngineError, EventQueue, ProcessId, Step};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The reference scenario: floors 1..=5, base floor 1, 1 floor/s, λ = 0.1,
/// 1 s hold, 0.5 s idle re-check, seed 31, 100 s horizon.
fn test_config() -> SimulationConfig {
    SimulationConfig {
        floor_min:         1,
        floor_max:         5,
        speed:             1.0,
        arrival_rate:      0.1,
        base_floor:        Some(1),
        base_floor_weight: 5.0,
        wait_time:         1.0,
        check_interval:    0.5,
        seed:              31,
        start_unix_secs:   1_700_000_000,
        duration:          100.0,
    }
}

/// A busier variant so integration runs see plenty of requests.
fn busy_config(seed: u64) -> SimulationConfig {
    SimulationConfig {
        arrival_rate: 0.5,
        duration:     300.0,
        seed,
        ..test_config()
    }
}

fn elevator(config: &SimulationConfig) -> Elevator {
    Elevator::new(config, config.floor_set().unwrap())
}

fn generator(config: &SimulationConfig) -> DemandGenerator {
    DemandGenerator::new(config, config.floor_set().unwrap())
}

fn t(secs: f64) -> SimTime {
    SimTime::from_secs(secs)
}

// ── EventQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.push(t(5.0), ProcessId::Demand);
        q.push(t(1.0), ProcessId::Elevator);
        q.push(t(3.0), ProcessId::Demand);
        assert_eq!(q.pop_earliest(), Some((t(1.0), ProcessId::Elevator)));
        assert_eq!(q.pop_earliest(), Some((t(3.0), ProcessId::Demand)));
        assert_eq!(q.pop_earliest(), Some((t(5.0), ProcessId::Demand)));
        assert_eq!(q.pop_earliest(), None);
    }

    #[test]
    fn simultaneous_events_resume_in_registration_order() {
        // Pushed generator-first, but the elevator owns the lower process
        // id and must come out first.
        let mut q = EventQueue::new();
        q.push(t(2.0), ProcessId::Demand);
        q.push(t(2.0), ProcessId::Elevator);
        assert_eq!(q.pop_earliest(), Some((t(2.0), ProcessId::Elevator)));
        assert_eq!(q.pop_earliest(), Some((t(2.0), ProcessId::Demand)));
    }

    #[test]
    fn next_time_peeks_without_removing() {
        let mut q = EventQueue::new();
        assert_eq!(q.next_time(), None);
        q.push(t(4.0), ProcessId::Elevator);
        q.push(t(2.0), ProcessId::Demand);
        assert_eq!(q.next_time(), Some(t(2.0)));
        assert_eq!(q.len(), 2);
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod elevator_agent {
    use super::*;

    #[test]
    fn enqueue_rejects_unknown_floor() {
        let mut lift = elevator(&test_config());
        match lift.enqueue(9) {
            Err(EngineError::InvalidFloor { floor: 9, .. }) => {}
            other => panic!("expected InvalidFloor, got {other:?}"),
        }
        assert_eq!(lift.queue_len(), 0);
    }

    #[test]
    fn serves_task_then_returns_to_base() {
        let mut lift = elevator(&test_config());
        lift.enqueue(4).unwrap();

        // Dequeue and travel: |1 − 4| / 1.0 = 3 s.
        assert_eq!(lift.resume(t(0.0)), 3.0);
        assert!(lift.is_moving());

        // Arrival bookkeeping, then the 1 s hold.
        assert_eq!(lift.resume(t(3.0)), 1.0);
        assert_eq!(lift.current_floor(), 4);
        assert_eq!(lift.last_floor(), Some(1));
        assert!(!lift.is_moving());

        // Hold over, queue empty: seek the base floor, 3 s back down.
        assert_eq!(lift.resume(t(4.0)), 3.0);
        assert!(lift.is_moving());

        // Parked at base: idle capture, then the 0.5 s re-check.
        assert_eq!(lift.resume(t(7.0)), 0.5);
        assert_eq!(lift.current_floor(), 1);
        assert_eq!(lift.last_floor(), Some(4));
        assert!(!lift.is_moving());
        assert!(lift.has_pending_snapshot());
        assert_eq!(lift.idle_since(), Some(t(7.0)));
    }

    #[test]
    fn zero_travel_skips_the_move() {
        let mut lift = elevator(&test_config());
        lift.enqueue(1).unwrap();

        // Already at floor 1: no move observation, straight to the hold.
        assert_eq!(lift.resume(t(0.0)), 1.0);
        assert!(!lift.is_moving());
        assert_eq!(lift.last_floor(), None);
        assert_eq!(lift.current_floor(), 1);
    }

    #[test]
    fn repeated_idle_checks_overwrite_the_pending_snapshot() {
        let mut lift = elevator(&test_config());

        assert_eq!(lift.resume(t(0.0)), 0.5);
        let first = lift.pending_snapshot().unwrap().clone();
        assert_eq!(first.captured_at, t(0.0));
        assert_eq!(first.time_idle, 0.0);

        // Still idle at the next check: one snapshot, fresher capture,
        // idle_since unchanged.
        assert_eq!(lift.resume(t(0.5)), 0.5);
        let second = lift.pending_snapshot().unwrap().clone();
        assert_eq!(second.captured_at, t(0.5));
        assert_eq!(second.time_idle, 0.5);
        assert_eq!(lift.idle_since(), Some(t(0.0)));

        lift.resume(t(1.0));
        assert_eq!(lift.pending_snapshot().unwrap().time_idle, 1.0);
    }

    #[test]
    fn idle_since_resets_when_a_task_is_served() {
        let mut lift = elevator(&test_config());
        lift.resume(t(0.0));
        assert_eq!(lift.idle_since(), Some(t(0.0)));

        lift.enqueue(1).unwrap();
        lift.resume(t(0.5)); // zero travel → hold
        assert_eq!(lift.idle_since(), None);

        // Back idle after the hold: a fresh idle period begins.
        lift.resume(t(1.5));
        assert_eq!(lift.idle_since(), Some(t(1.5)));
        assert_eq!(lift.pending_snapshot().unwrap().time_idle, 0.0);
    }

    #[test]
    fn finalize_without_pending_is_a_hard_error() {
        let mut lift = elevator(&test_config());
        match lift.finalize_snapshot(2) {
            Err(EngineError::NoPendingSnapshot) => {}
            other => panic!("expected NoPendingSnapshot, got {other:?}"),
        }
    }

    #[test]
    fn finalize_attaches_label_and_clears_the_slot() {
        let mut lift = elevator(&test_config());
        lift.resume(t(0.0));
        let record = lift.finalize_snapshot(3).unwrap();
        assert_eq!(record.next_floor_requested, 3);
        assert!(!lift.has_pending_snapshot());
    }

    #[test]
    fn cold_start_snapshot_reports_current_floor_as_last() {
        let mut lift = elevator(&test_config());
        lift.resume(t(0.0));
        let pending = lift.pending_snapshot().unwrap();
        assert_eq!(pending.current_floor, 1);
        assert_eq!(pending.last_floor, 1);
        assert_eq!(pending.floor_demand, vec![0; 5]);
        assert!(pending.features.mean_requested_floor.is_none());
        assert!(pending.features.requests_entropy.is_none());
        assert!(pending.features.distance_to_center_of_mass.is_none());
    }

    #[test]
    fn task_arriving_mid_seek_is_served_on_arrival() {
        let mut lift = elevator(&test_config());
        lift.enqueue(4).unwrap();
        lift.resume(t(0.0)); // travel to 4
        lift.resume(t(3.0)); // arrive, hold
        assert_eq!(lift.resume(t(4.0)), 3.0); // vacant → seek base

        // A request lands while the car is between floors.
        lift.enqueue(2).unwrap();

        // On base arrival the queued task is dequeued immediately: 1 s up.
        assert_eq!(lift.resume(t(7.0)), 1.0);
        assert!(lift.is_moving());
        assert!(!lift.has_pending_snapshot());
    }

    #[test]
    fn stays_put_when_base_floor_disabled() {
        let mut config = test_config();
        config.base_floor = None;
        let mut lift = Elevator::new(&config, config.floor_set().unwrap());
        lift.enqueue(3).unwrap();
        lift.resume(t(0.0)); // travel to 3
        lift.resume(t(2.0)); // arrive, hold

        // Vacant with no base floor: idle in place at floor 3.
        assert_eq!(lift.resume(t(3.0)), 0.5);
        assert_eq!(lift.current_floor(), 3);
        assert_eq!(lift.pending_snapshot().unwrap().current_floor, 3);
    }
}

// ── DemandGenerator ───────────────────────────────────────────────────────────

#[cfg(test)]
mod demand_generator {
    use super::*;

    #[test]
    fn bootstrap_only_samples_the_first_gap() {
        let config = test_config();
        let mut lift = elevator(&config);
        let mut arrivals = generator(&config);
        let mut rng = SimRng::new(config.seed);
        let mut out = Vec::new();

        let gap = arrivals.resume(t(0.0), &mut lift, &mut rng, &mut out).unwrap();
        assert!(gap >= 0.0 && gap.is_finite());
        assert!(arrivals.events().is_empty());
        assert!(out.is_empty());
        assert_eq!(lift.queue_len(), 0);
    }

    #[test]
    fn dispatch_enqueues_pickup_before_dropoff() {
        let config = test_config();
        let mut lift = elevator(&config);
        let mut arrivals = generator(&config);
        let mut rng = SimRng::new(7);
        let mut out = Vec::new();

        arrivals.resume(t(0.0), &mut lift, &mut rng, &mut out).unwrap();
        arrivals.resume(t(2.0), &mut lift, &mut rng, &mut out).unwrap();

        let event = arrivals.events()[0];
        assert_ne!(event.origin, event.destination);
        assert_eq!(event.arrival_time, t(2.0));
        let queued: Vec<i32> = lift.queued_tasks().collect();
        assert_eq!(queued, vec![event.origin, event.destination]);
    }

    #[test]
    fn labels_the_pending_snapshot_with_the_next_origin() {
        let config = test_config();
        let mut lift = elevator(&config);
        let mut arrivals = generator(&config);
        let mut rng = SimRng::new(7);
        let mut out = Vec::new();

        lift.resume(t(0.0)); // idle capture at the base floor
        arrivals.resume(t(0.0), &mut lift, &mut rng, &mut out).unwrap();
        arrivals.resume(t(4.0), &mut lift, &mut rng, &mut out).unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].next_floor_requested, arrivals.events()[0].origin);
        assert!(!lift.has_pending_snapshot());
    }

    #[test]
    fn no_record_is_emitted_without_a_pending_snapshot() {
        let config = test_config();
        let mut lift = elevator(&config); // never resumed — nothing captured
        let mut arrivals = generator(&config);
        let mut rng = SimRng::new(7);
        let mut out = Vec::new();

        arrivals.resume(t(0.0), &mut lift, &mut rng, &mut out).unwrap();
        arrivals.resume(t(4.0), &mut lift, &mut rng, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(arrivals.events().len(), 1);
    }

    #[test]
    fn finalized_record_excludes_the_request_that_labels_it() {
        let config = test_config();
        let mut lift = elevator(&config);
        let mut arrivals = generator(&config);
        let mut rng = SimRng::new(7);
        let mut out = Vec::new();

        lift.resume(t(0.0));
        arrivals.resume(t(0.0), &mut lift, &mut rng, &mut out).unwrap();
        arrivals.resume(t(4.0), &mut lift, &mut rng, &mut out).unwrap();

        // The histogram has counted the new origin, the record has not.
        assert_eq!(lift.demand().total(), 1);
        assert_eq!(out[0].floor_demand.iter().sum::<u64>(), 0);
    }

    #[test]
    fn histogram_total_tracks_generated_events() {
        let config = test_config();
        let mut lift = elevator(&config);
        let mut arrivals = generator(&config);
        let mut rng = SimRng::new(11);
        let mut out = Vec::new();

        let mut now = t(0.0);
        arrivals.resume(now, &mut lift, &mut rng, &mut out).unwrap();
        for _ in 0..50 {
            now = now + 1.0;
            arrivals.resume(now, &mut lift, &mut rng, &mut out).unwrap();
        }
        assert_eq!(arrivals.events().len(), 50);
        assert_eq!(lift.demand().total(), 50);
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use super::*;

    #[test]
    fn rejects_invalid_configuration() {
        let mut config = test_config();
        config.speed = 0.0;
        assert!(Engine::new(&config).is_err());
    }

    #[test]
    fn cold_start_capture_happens_before_any_request() {
        let mut engine = Engine::new(&test_config()).unwrap();

        // First step resumes the elevator at t = 0: idle at the base floor,
        // so it captures an all-zero observation immediately.
        assert_eq!(engine.step().unwrap(), Step::Advanced);
        let pending = engine.elevator().pending_snapshot().unwrap();
        assert_eq!(pending.current_floor, 1);
        assert_eq!(pending.floor_demand, vec![0, 0, 0, 0, 0]);
        assert_eq!(pending.time_idle, 0.0);
        assert!(pending.features.requests_entropy.is_none());
        assert!(engine.demand().events().is_empty());
    }

    #[test]
    fn horizon_stops_the_run_without_resuming_past_it() {
        let mut config = test_config();
        config.duration = 0.1;
        config.arrival_rate = 1e-9; // first arrival essentially never lands
        let mut engine = Engine::new(&config).unwrap();
        engine.run().unwrap();

        // Both processes ran exactly once (at t = 0); their next resumes
        // lie past the horizon and were abandoned.
        assert_eq!(engine.clock().now, SimTime::ZERO);
        assert!(engine.demand().events().is_empty());
        assert!(engine.drain_records().is_empty());
        assert_eq!(engine.step().unwrap(), Step::HorizonReached);
    }

    #[test]
    fn clock_never_passes_the_horizon() {
        let mut engine = Engine::new(&busy_config(3)).unwrap();
        engine.run().unwrap();
        assert!(engine.clock().now <= engine.horizon());
        assert!(!engine.demand().events().is_empty());
    }

    #[test]
    fn histogram_total_equals_event_count_after_a_run() {
        let mut engine = Engine::new(&busy_config(17)).unwrap();
        engine.run().unwrap();
        let events = engine.demand().events().len();
        assert!(events > 0);
        assert_eq!(engine.elevator().demand().total(), events as u64);
    }

    #[test]
    fn every_record_is_labeled_with_the_next_origin() {
        let mut engine = Engine::new(&busy_config(5)).unwrap();
        engine.run().unwrap();
        let records = engine.drain_records();
        assert!(!records.is_empty());

        let events = engine.demand().events();
        for record in &records {
            let next = events
                .iter()
                .find(|e| e.arrival_time >= record.captured_at)
                .expect("a finalized record implies a following request");
            assert_eq!(record.next_floor_requested, next.origin);
        }
    }

    #[test]
    fn record_histograms_are_monotone_over_time() {
        let mut engine = Engine::new(&busy_config(5)).unwrap();
        engine.run().unwrap();
        let records = engine.drain_records();
        let totals: Vec<u64> = records
            .iter()
            .map(|r| r.floor_demand.iter().sum())
            .collect();
        assert!(totals.windows(2).all(|w| w[0] <= w[1]), "totals {totals:?}");
    }

    #[test]
    fn same_seed_replays_identically() {
        let config = busy_config(31);
        let mut a = Engine::new(&config).unwrap();
        let mut b = Engine::new(&config).unwrap();
        a.run().unwrap();
        b.run().unwrap();

        assert_eq!(a.demand().events(), b.demand().events());
        assert_eq!(a.drain_records(), b.drain_records());
        assert_eq!(a.clock().now, b.clock().now);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Engine::new(&busy_config(1)).unwrap();
        let mut b = Engine::new(&busy_config(2)).unwrap();
        a.run().unwrap();
        b.run().unwrap();
        assert_ne!(a.demand().events(), b.demand().events());
    }
}
