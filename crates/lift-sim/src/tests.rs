//! Unit tests for lift-sim.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::Level;

use lift_car::CarSnapshot;
use lift_core::{BankConfig, CallDirection, Direction, MotionState, SimTime};

use crate::{
    BankBuilder, BankEvent, BankObserver, Controller, EventLogger, LogEntry, NullLogger, Snapshot,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const LOADING: Duration = Duration::from_millis(10_000);
const TRAVEL: Duration = Duration::from_millis(10_000);

fn config(car_count: usize) -> BankConfig {
    BankConfig {
        car_count,
        total_floors:       10,
        loading_latency_ms: LOADING.as_millis() as u64,
        travel_latency_ms:  TRAVEL.as_millis() as u64,
        start_of_day_secs:  8 * 3_600,
    }
}

#[derive(Default)]
struct Recorder {
    snapshots: Vec<Snapshot>,
    events:    Vec<LogEntry>,
}

impl BankObserver for Recorder {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self.snapshots.push(snapshot.clone());
    }

    fn on_event(&mut self, entry: &LogEntry) {
        self.events.push(entry.clone());
    }
}

/// Shared record of everything sent to the logger.
#[derive(Clone, Default)]
struct CaptureLogger(Rc<RefCell<Vec<(Level, String)>>>);

impl CaptureLogger {
    fn levels_of(&self, needle: &str) -> Vec<Level> {
        self.0
            .borrow()
            .iter()
            .filter(|(_, msg)| msg.contains(needle))
            .map(|(level, _)| *level)
            .collect()
    }
}

impl EventLogger for CaptureLogger {
    fn record(&mut self, level: Level, _time: SimTime, event: &BankEvent) {
        self.0.borrow_mut().push((level, event.to_string()));
    }
}

fn bank(floors: Vec<u32>) -> Controller<Recorder> {
    BankBuilder::new(config(floors.len()))
        .initial_floors(floors)
        .observer(Recorder::default())
        .logger(NullLogger)
        .build()
        .unwrap()
}

fn messages<O: BankObserver>(bank: &Controller<O>) -> Vec<&str> {
    bank.event_log().messages().collect()
}

fn assert_car_invariants(car: &CarSnapshot, total_floors: u32) {
    assert!((1..=total_floors).contains(&car.current_floor), "{car:?}");
    for (i, &f) in car.destinations.iter().enumerate() {
        assert!((1..=total_floors).contains(&f), "{car:?}");
        assert!(i == 0 || f != car.current_floor, "current floor queued behind head: {car:?}");
        assert!(!car.destinations[..i].contains(&f), "duplicate destination: {car:?}");
    }
    assert_eq!(car.next_destination, car.destinations.first().copied());
    if car.motion == MotionState::Idle {
        assert_eq!(car.direction == Direction::Idle, car.destinations.is_empty(), "{car:?}");
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use crate::SimError;

    #[test]
    fn defaults_place_every_car_on_floor_one() {
        let bank = BankBuilder::new(BankConfig::default()).build().unwrap();
        assert_eq!(bank.cars().len(), 4);
        for (i, car) in bank.cars().iter().enumerate() {
            assert_eq!(car.id().index(), i);
            assert_eq!(car.current_floor(), 1);
            assert_eq!(car.direction(), Direction::Idle);
            assert_eq!(car.motion(), MotionState::Idle);
        }
        assert_eq!(bank.now(), SimTime::ZERO);
        assert_eq!(bank.generation(), 0);
        assert!(bank.event_log().is_empty());
    }

    #[test]
    fn zero_cars_is_fatal() {
        let err = BankBuilder::new(config(0)).build();
        assert!(matches!(err, Err(SimError::Config(_))));
    }

    #[test]
    fn single_floor_is_fatal() {
        let cfg = BankConfig { total_floors: 1, ..config(2) };
        assert!(matches!(BankBuilder::new(cfg).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn initial_floor_count_must_match() {
        let err = BankBuilder::new(config(4)).initial_floors(vec![1, 2]).build();
        match err {
            Err(SimError::CarCountMismatch { expected, got, what }) => {
                assert_eq!((expected, got, what), (4, 2, "initial floors"));
            }
            _ => panic!("expected CarCountMismatch"),
        }
    }

    #[test]
    fn initial_floor_out_of_range_is_fatal() {
        let err = BankBuilder::new(config(2)).initial_floors(vec![1, 11]).build();
        assert!(matches!(err, Err(SimError::Config(_))));
    }

    #[test]
    fn initial_floors_are_used() {
        let bank = bank(vec![3, 7]);
        let floors: Vec<u32> = bank.cars().iter().map(|c| c.current_floor()).collect();
        assert_eq!(floors, vec![3, 7]);
    }
}

// ── Requests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod requests {
    use super::*;
    use crate::{RejectReason, RequestOutcome, SnapshotCause};
    use lift_core::CarId;

    #[test]
    fn tie_goes_to_car_one() {
        let mut bank = bank(vec![1, 1, 1, 1]);
        let outcome = bank.request_elevator(7, CallDirection::Up);
        assert_eq!(outcome, RequestOutcome::Accepted { car: CarId(1) });

        let car = &bank.cars()[0];
        assert_eq!(car.destinations(), &[7]);
        assert_eq!(car.direction(), Direction::Up);
        assert!(bank.cars()[1..].iter().all(|c| c.destinations().is_empty()));

        assert_eq!(bank.pending_requests().len(), 1);
        assert_eq!(bank.pending_requests()[0].floor, 7);
        assert_eq!(
            messages(&bank),
            vec!["UP request received on floor 7", "Elevator 1 assigned to floor 7"]
        );
    }

    #[test]
    fn duplicate_request_is_noop() {
        let mut bank = bank(vec![1, 1]);
        assert!(bank.request_elevator(7, CallDirection::Up).is_accepted());
        assert_eq!(bank.request_elevator(7, CallDirection::Up), RequestOutcome::Deduplicated);

        assert_eq!(bank.pending_requests().len(), 1);
        assert_eq!(bank.cars()[0].destinations(), &[7]);
        assert!(bank.cars()[1].destinations().is_empty());
        assert_eq!(bank.event_log().len(), 2);
        assert_eq!(bank.observer().snapshots.len(), 1);
    }

    #[test]
    fn opposite_direction_is_a_separate_call() {
        let mut bank = bank(vec![1, 1]);
        bank.request_elevator(7, CallDirection::Up);
        // Car 1 now heads Up; a Down call at 7 is misaligned for it.
        let outcome = bank.request_elevator(7, CallDirection::Down);
        assert_eq!(outcome.car(), Some(CarId(2)));
        assert_eq!(bank.pending_requests().len(), 2);
    }

    #[test]
    fn out_of_range_floors_are_rejected() {
        let log = CaptureLogger::default();
        let mut bank = BankBuilder::new(config(2))
            .observer(Recorder::default())
            .logger(log.clone())
            .build()
            .unwrap();

        for floor in [0, 11] {
            assert_eq!(
                bank.request_elevator(floor, CallDirection::Up),
                RequestOutcome::Rejected(RejectReason::InvalidFloor { floor, total_floors: 10 })
            );
        }
        assert!(bank.pending_requests().is_empty());
        assert!(bank.event_log().is_empty());
        assert!(bank.observer().snapshots.is_empty());
        assert_eq!(log.levels_of("rejected"), vec![Level::Warn, Level::Warn]);
    }

    #[test]
    fn aligned_moving_car_takes_the_call() {
        let mut bank = bank(vec![2, 1]);
        assert_eq!(bank.request_elevator(5, CallDirection::Up).car(), Some(CarId(1)));
        bank.tick(); // car 1: 2 → 3, heading Up with [5]
        assert_eq!(bank.cars()[0].current_floor(), 3);

        // Car 1 scores 4 (aligned), car 2 scores 6.
        assert_eq!(bank.request_elevator(7, CallDirection::Up).car(), Some(CarId(1)));
        assert_eq!(bank.cars()[0].destinations(), &[5, 7]);
    }

    #[test]
    fn misaligned_car_loses_to_idle_car() {
        let mut bank = bank(vec![4, 9]);
        assert_eq!(bank.request_elevator(1, CallDirection::Down).car(), Some(CarId(1)));
        bank.tick(); // car 1: 4 → 3 heading Down
        // Car 1 scores 4 + 20 + 5; idle car 2 scores 2.
        assert_eq!(bank.request_elevator(7, CallDirection::Up).car(), Some(CarId(2)));
    }

    #[test]
    fn busy_car_is_never_skipped() {
        let mut bank = bank(vec![4]);
        bank.request_elevator(1, CallDirection::Down);
        bank.tick();
        assert_eq!(bank.request_elevator(7, CallDirection::Up).car(), Some(CarId(1)));
        assert_eq!(bank.cars()[0].destinations(), &[1, 7]);
    }

    #[test]
    fn car_already_at_floor_serves_on_the_spot() {
        let mut bank = bank(vec![3, 1]);
        let outcome = bank.request_elevator(3, CallDirection::Down);
        assert_eq!(outcome, RequestOutcome::Accepted { car: CarId(1) });
        assert!(bank.pending_requests().is_empty());
        assert!(bank.cars()[0].destinations().is_empty());
        assert_eq!(bank.cars()[0].direction(), Direction::Idle);
        assert_eq!(bank.event_log().latest().unwrap().message, "Elevator 1 already at floor 3");
    }

    #[test]
    fn request_emits_one_snapshot_after_its_log_lines() {
        let mut bank = bank(vec![1, 1]);
        bank.request_elevator(4, CallDirection::Up);

        let rec = bank.observer();
        assert_eq!(rec.events.len(), 2);
        assert_eq!(rec.snapshots.len(), 1);
        let snap = &rec.snapshots[0];
        assert_eq!(snap.cause, SnapshotCause::Request);
        assert_eq!(snap.pending_requests.len(), 1);
        assert_eq!(snap.recent_log.len(), 2);
        assert_eq!(snap.car(CarId(1)).unwrap().destinations, vec![4]);
    }

    #[test]
    fn moving_car_passes_through_and_call_stays_pending() {
        let mut bank = bank(vec![1]);
        bank.request_elevator(5, CallDirection::Up);
        bank.tick();
        assert_eq!(bank.cars()[0].current_floor(), 2);
        assert_eq!(bank.cars()[0].motion(), MotionState::Moving);

        let outcome = bank.request_elevator(2, CallDirection::Up);
        assert_eq!(outcome, RequestOutcome::Accepted { car: CarId(1) });
        let pending: Vec<u32> = bank.pending_requests().iter().map(|r| r.floor).collect();
        assert_eq!(pending, vec![5, 2]);
        assert_eq!(bank.cars()[0].destinations(), &[5]);
        assert_eq!(bank.event_log().latest().unwrap().message, "Elevator 1 assigned to floor 2");

        // Arriving is not stopping: the call survives the next tick.
        bank.tick();
        assert_eq!(bank.cars()[0].motion(), MotionState::Idle);
        assert!(bank.pending_requests().iter().any(|r| r.floor == 2));
    }

    #[test]
    fn loading_car_at_floor_serves_on_the_spot() {
        let mut bank = bank(vec![4]);
        bank.request_elevator(5, CallDirection::Up);
        bank.tick();
        bank.tick();
        assert_eq!(bank.cars()[0].motion(), MotionState::Loading);
        assert!(bank.pending_requests().is_empty());

        let outcome = bank.request_elevator(5, CallDirection::Down);
        assert_eq!(outcome, RequestOutcome::Accepted { car: CarId(1) });
        assert!(bank.pending_requests().is_empty());
        assert!(bank.cars()[0].destinations().is_empty());
        assert_eq!(bank.cars()[0].motion(), MotionState::Loading);
        assert_eq!(bank.event_log().latest().unwrap().message, "Elevator 1 already at floor 5");
    }

    #[test]
    fn score_cache_survives_ticks_for_unchanged_cars() {
        let mut bank = bank(vec![1, 5]);
        bank.request_elevator(3, CallDirection::Up);
        assert_eq!(bank.score_cache().misses(), 2);
        assert_eq!(bank.score_cache().len(), 2);

        // Car 1 travels to floor 3 and stops; car 2 never moves.
        for _ in 0..4 {
            bank.tick();
        }
        assert_eq!(bank.cars()[0].motion(), MotionState::Loading);
        assert!(bank.pending_requests().is_empty());

        bank.request_elevator(3, CallDirection::Up);
        assert_eq!(bank.score_cache().hits(), 1);
        assert_eq!(bank.score_cache().misses(), 3);
    }
}

// ── Tick ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick {
    use super::*;
    use crate::SnapshotCause;
    use lift_core::CarId;

    #[test]
    fn stop_at_queued_floor() {
        let mut bank = bank(vec![4]);
        bank.request_elevator(5, CallDirection::Up);
        bank.request_elevator(7, CallDirection::Up);
        assert_eq!(bank.cars()[0].destinations(), &[5, 7]);

        bank.tick();
        let car = &bank.cars()[0];
        assert_eq!(car.current_floor(), 5);
        assert_eq!(car.motion(), MotionState::Moving);
        assert_eq!(car.destinations(), &[5, 7]);

        bank.tick();
        let car = &bank.cars()[0];
        assert_eq!(car.motion(), MotionState::Loading);
        assert_eq!(car.destinations(), &[7]);
        assert_eq!(bank.pending_requests().len(), 1);
        assert_eq!(bank.pending_requests()[0].floor, 7);
        assert_eq!(bank.event_log().latest().unwrap().message, "Elevator 1 stopped at floor 5");
    }

    #[test]
    fn one_floor_per_tick_with_arrival_ticks_between() {
        let mut bank = bank(vec![1]);
        bank.request_elevator(4, CallDirection::Up);
        let start = bank.event_log().len();
        for _ in 0..6 {
            bank.tick();
        }
        let trip: Vec<&str> = messages(&bank)[start..].to_vec();
        assert_eq!(
            trip,
            vec![
                "Elevator 1 moving UP from floor 1",
                "Elevator 1 arrived at floor 2",
                "Elevator 1 moving UP from floor 2",
                "Elevator 1 arrived at floor 3",
                "Elevator 1 moving UP from floor 3",
                "Elevator 1 stopped at floor 4",
            ]
        );
        assert_eq!(bank.cars()[0].motion(), MotionState::Loading);
        assert_eq!(bank.ticks(), 6);
    }

    #[test]
    fn loading_car_waits_for_latency() {
        let mut bank = bank(vec![1]);
        bank.request_elevator(2, CallDirection::Up);
        bank.request_elevator(5, CallDirection::Up);
        bank.tick(); // depart
        bank.tick(); // stop at 2
        assert_eq!(bank.cars()[0].motion(), MotionState::Loading);

        for _ in 0..5 {
            bank.tick();
        }
        assert_eq!(bank.cars()[0].current_floor(), 2);
        assert_eq!(bank.cars()[0].motion(), MotionState::Loading);

        bank.advance_by(LOADING - Duration::from_millis(1));
        assert_eq!(bank.cars()[0].motion(), MotionState::Loading);

        bank.advance_by(Duration::from_millis(1));
        let car = &bank.cars()[0];
        assert_eq!(car.motion(), MotionState::Idle);
        assert_eq!(car.direction(), Direction::Up);
        assert_eq!(
            bank.event_log().latest().unwrap().message,
            "Elevator 1 ready to move from floor 2"
        );

        bank.tick();
        assert_eq!(bank.cars()[0].current_floor(), 3);
    }

    #[test]
    fn finished_car_goes_idle() {
        let mut bank = bank(vec![2]);
        bank.request_elevator(1, CallDirection::Up);
        bank.tick();
        bank.tick();
        bank.advance_by(LOADING);
        let car = &bank.cars()[0];
        assert_eq!(car.current_floor(), 1);
        assert_eq!(car.direction(), Direction::Idle);
        assert_eq!(car.motion(), MotionState::Idle);
        assert!(bank.pending_requests().is_empty());
    }

    #[test]
    fn cars_step_in_id_order() {
        let mut bank = bank(vec![1, 10]);
        assert_eq!(bank.request_elevator(3, CallDirection::Up).car(), Some(CarId(1)));
        assert_eq!(bank.request_elevator(8, CallDirection::Down).car(), Some(CarId(2)));
        bank.tick();
        let log = messages(&bank);
        assert_eq!(
            &log[log.len() - 2..],
            &["Elevator 1 moving UP from floor 1", "Elevator 2 moving DOWN from floor 10"]
        );
    }

    #[test]
    fn idle_tick_only_emits_snapshot() {
        let mut bank = bank(vec![1, 1]);
        bank.tick();
        assert!(bank.event_log().is_empty());
        let snaps = &bank.observer().snapshots;
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].cause, SnapshotCause::Tick(1));
    }

    #[test]
    fn travel_notice_changes_nothing() {
        let mut bank = bank(vec![1]);
        bank.request_elevator(3, CallDirection::Up);
        bank.tick();
        let before = bank.state();
        let log_len = bank.event_log().len();
        let snaps = bank.observer().snapshots.len();

        bank.advance_by(TRAVEL);
        let after = bank.state();
        assert_eq!(before.cars, after.cars);
        assert_eq!(bank.event_log().len(), log_len);
        assert_eq!(bank.observer().snapshots.len(), snaps + 1);
        assert_eq!(
            bank.observer().snapshots.last().unwrap().cause,
            SnapshotCause::Completion(CarId(1))
        );
        assert_eq!(bank.cars()[0].motion(), MotionState::Moving);
    }
}

// ── Virtual time and completions ──────────────────────────────────────────────

#[cfg(test)]
mod completions {
    use super::*;

    #[test]
    fn completion_runs_at_its_fire_time() {
        let mut bank = bank(vec![1]);
        bank.request_elevator(2, CallDirection::Up);
        bank.tick();
        bank.tick();

        bank.advance_by(Duration::from_secs(60));
        assert_eq!(bank.now(), SimTime(60_000));
        let entry = bank.event_log().latest().unwrap();
        assert_eq!(entry.message, "Elevator 1 ready to move from floor 2");
        assert_eq!(entry.time, SimTime(10_000));
        assert_eq!(entry.line(), "[08:00:10] Elevator 1 ready to move from floor 2");
        assert_eq!(bank.scheduled_completions(), 0);
    }

    #[test]
    fn completions_fire_in_time_order() {
        let mut bank = bank(vec![1, 1]);
        bank.request_elevator(2, CallDirection::Up); // car 1
        bank.request_elevator(2, CallDirection::Down); // car 2 (car 1 misaligned)
        bank.tick(); // both depart
        bank.advance_by(Duration::from_secs(1));
        bank.tick(); // both stop at t=1s, car 1 first
        bank.advance_by(Duration::from_secs(30));

        let ready: Vec<&LogEntry> = bank
            .event_log()
            .iter()
            .filter(|e| e.message.contains("ready to move"))
            .collect();
        assert_eq!(ready.len(), 2);
        assert!(ready[0].message.starts_with("Elevator 1"));
        assert!(ready[1].message.starts_with("Elevator 2"));
        assert!(ready.iter().all(|e| e.time == SimTime(11_000)));
    }

    #[test]
    fn advance_to_never_goes_back() {
        let mut bank = bank(vec![1]);
        bank.advance_to(SimTime(5_000));
        bank.advance_to(SimTime(1_000));
        assert_eq!(bank.now(), SimTime(5_000));
    }

    #[test]
    fn reset_retires_outstanding_completions() {
        let log = CaptureLogger::default();
        let mut bank = BankBuilder::new(config(1))
            .observer(Recorder::default())
            .logger(log.clone())
            .build()
            .unwrap();
        bank.request_elevator(2, CallDirection::Up);
        bank.tick();
        bank.tick();
        assert_eq!(bank.scheduled_completions(), 2);

        bank.reset();
        assert_eq!(bank.generation(), 1);
        let snaps = bank.observer().snapshots.len();
        let state = bank.state();

        bank.advance_by(Duration::from_secs(20));
        assert_eq!(bank.state().cars, state.cars);
        assert_eq!(bank.event_log().len(), 1);
        assert_eq!(bank.observer().snapshots.len(), snaps);
        assert_eq!(bank.scheduled_completions(), 0);
        assert_eq!(log.levels_of("Dropped completion"), vec![Level::Debug, Level::Debug]);
    }

    #[test]
    fn completions_after_reset_still_work() {
        let mut bank = bank(vec![1]);
        bank.request_elevator(2, CallDirection::Up);
        bank.tick();
        bank.tick();
        bank.reset();

        bank.request_elevator(2, CallDirection::Up);
        bank.tick();
        bank.tick();
        bank.advance_by(LOADING);
        assert_eq!(bank.cars()[0].motion(), MotionState::Idle);
        assert_eq!(
            bank.event_log().latest().unwrap().message,
            "Elevator 1 ready to move from floor 2"
        );
    }
}

// ── Reset ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reset {
    use super::*;
    use crate::SnapshotCause;

    #[test]
    fn reset_restores_initial_bank() {
        let mut bank = bank(vec![3, 7]);
        bank.request_elevator(5, CallDirection::Up);
        bank.request_elevator(1, CallDirection::Down);
        bank.tick();
        bank.tick();
        bank.advance_by(Duration::from_secs(3));

        bank.reset();
        let floors: Vec<u32> = bank.cars().iter().map(|c| c.current_floor()).collect();
        assert_eq!(floors, vec![3, 7]);
        assert!(bank.cars().iter().all(|c| c.destinations().is_empty()
            && c.motion() == MotionState::Idle
            && c.direction() == Direction::Idle));
        assert!(bank.pending_requests().is_empty());
        assert_eq!(messages(&bank), vec!["Simulation reset"]);
        assert_eq!(bank.ticks(), 0);
        assert_eq!(bank.now(), SimTime(3_000));

        let last = bank.observer().snapshots.last().unwrap();
        assert_eq!(last.cause, SnapshotCause::Reset);
        assert_eq!(last.generation, 1);
    }
}

// ── Event log ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_log {
    use super::*;
    use crate::{EventLog, SnapshotCause};

    #[test]
    fn keeps_the_latest_hundred() {
        let mut bank = bank(vec![1]);
        for i in 0..150 {
            bank.note(format!("note {i}"));
        }
        let log = messages(&bank);
        assert_eq!(log.len(), 100);
        let expected: Vec<String> = (50..150).map(|i| format!("note {i}")).collect();
        assert_eq!(log, expected);

        let rec = bank.observer();
        assert_eq!(rec.events.len(), 150);
        assert_eq!(rec.snapshots.len(), 150);
        assert!(rec.snapshots.iter().all(|s| s.cause == SnapshotCause::Log));
        assert_eq!(rec.snapshots.last().unwrap().recent_log.len(), 100);
    }

    #[test]
    fn line_format_uses_time_of_day() {
        let mut bank = bank(vec![1]);
        bank.note("hello");
        bank.advance_by(Duration::from_secs(3_661));
        bank.note("later");
        let lines: Vec<String> = bank.event_log().iter().map(LogEntry::line).collect();
        assert_eq!(lines, vec!["[08:00:00] hello", "[09:01:01] later"]);
    }

    #[test]
    fn timestamps_wrap_at_midnight() {
        let cfg = BankConfig { start_of_day_secs: 86_399, ..config(1) };
        let mut bank = BankBuilder::new(cfg).logger(NullLogger).build().unwrap();
        bank.advance_by(Duration::from_secs(2));
        bank.note("past midnight");
        assert_eq!(bank.event_log().latest().unwrap().line(), "[00:00:01] past midnight");
    }

    #[test]
    fn small_capacity_evicts_oldest() {
        let mut log = EventLog::with_capacity(3);
        for i in 0..5u64 {
            log.push(SimTime(i), "08:00:00".into(), format!("m{i}"));
        }
        assert_eq!(log.messages().collect::<Vec<_>>(), vec!["m2", "m3", "m4"]);
        assert_eq!(log.capacity(), 3);
        assert_eq!(EventLog::with_capacity(0).capacity(), 1);
    }
}

// ── Snapshots ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshots {
    use super::*;
    use crate::SnapshotCause;
    use lift_core::CarId;

    #[test]
    fn state_is_a_pure_read() {
        let mut bank = bank(vec![1, 4]);
        bank.request_elevator(6, CallDirection::Up);
        let before = bank.observer().snapshots.len();
        let snap = bank.state();
        assert_eq!(bank.observer().snapshots.len(), before);
        assert_eq!(snap.cause, SnapshotCause::Query);
        assert_eq!(snap.cars.len(), 2);
        assert_eq!(snap.car(CarId(2)).unwrap().next_destination, Some(6));
        assert!(snap.car(CarId(3)).is_none());
    }

    #[test]
    fn snapshot_is_an_owned_copy() {
        let mut bank = bank(vec![1]);
        bank.request_elevator(6, CallDirection::Up);
        let mut snap = bank.state();
        snap.cars[0].destinations.clear();
        snap.pending_requests.clear();
        assert_eq!(bank.cars()[0].destinations(), &[6]);
        assert_eq!(bank.pending_requests().len(), 1);
    }
}

// ── Logger ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod logger {
    use super::*;
    use lift_core::CarId;

    #[test]
    fn levels_follow_event_kind() {
        let log = CaptureLogger::default();
        let mut bank = BankBuilder::new(config(1)).logger(log.clone()).build().unwrap();
        bank.request_elevator(3, CallDirection::Up);
        bank.request_elevator(3, CallDirection::Up);
        bank.request_elevator(30, CallDirection::Up);

        assert_eq!(log.levels_of("request received"), vec![Level::Info]);
        assert_eq!(log.levels_of("already pending"), vec![Level::Debug]);
        assert_eq!(log.levels_of("rejected"), vec![Level::Warn]);
    }

    #[test]
    fn event_text() {
        let car = CarId(2);
        let cases = [
            (BankEvent::RequestReceived { floor: 5, direction: CallDirection::Up }, "UP request received on floor 5"),
            (BankEvent::Assigned { car, floor: 5 }, "Elevator 2 assigned to floor 5"),
            (BankEvent::AlreadyAtFloor { car, floor: 5 }, "Elevator 2 already at floor 5"),
            (BankEvent::Stopped { car, floor: 5 }, "Elevator 2 stopped at floor 5"),
            (BankEvent::ReadyToMove { car, floor: 5 }, "Elevator 2 ready to move from floor 5"),
            (BankEvent::Arrived { car, floor: 5 }, "Elevator 2 arrived at floor 5"),
            (BankEvent::Departed { car, direction: Direction::Up, from: 4 }, "Elevator 2 moving UP from floor 4"),
            (BankEvent::Reset, "Simulation reset"),
        ];
        for (event, text) in cases {
            assert_eq!(event.to_string(), text);
            assert_eq!(event.level(), Level::Info);
        }
    }
}

// ── Drivers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod drivers {
    use super::*;
    use crate::SimError;
    use lift_schedule::{HallCall, RandomTraffic, ScriptedTraffic};

    #[test]
    fn run_for_counts_whole_intervals() {
        let mut bank = bank(vec![1]);
        let summary = bank.run_for(Duration::from_millis(2_500), Duration::from_secs(1)).unwrap();
        assert_eq!(summary.ticks, 2);
        assert_eq!(bank.now(), SimTime(2_500));
        assert_eq!(bank.ticks(), 2);
    }

    #[test]
    fn zero_tick_interval_is_an_error() {
        let mut bank = bank(vec![1]);
        let err = bank.run_for(Duration::from_secs(1), Duration::ZERO);
        assert!(matches!(err, Err(SimError::Config(_))));
    }

    #[test]
    fn scripted_traffic_is_served() {
        let call = |at, floor| HallCall { at: SimTime(at), floor, direction: CallDirection::Up };
        let mut traffic = ScriptedTraffic::new(vec![call(0, 5), call(0, 5), call(1_000, 12)]);
        let mut bank = bank(vec![1]);

        let summary = bank
            .run_with_traffic(Duration::from_secs(30), Duration::from_secs(1), &mut traffic)
            .unwrap();
        assert_eq!(summary.calls, 3);
        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.deduplicated, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.ticks, 30);

        let car = &bank.cars()[0];
        assert_eq!(car.current_floor(), 5);
        assert_eq!(car.motion(), MotionState::Idle);
        assert_eq!(car.direction(), Direction::Idle);
        assert!(bank.pending_requests().is_empty());
    }

    #[test]
    fn random_traffic_keeps_invariants_and_drains() {
        let mut traffic = RandomTraffic::new(2024, 10);
        let mut bank = bank(vec![1, 1, 1, 1]);
        let tick = Duration::from_secs(1);

        let summary = bank
            .run_with_traffic(Duration::from_secs(600), tick, &mut traffic)
            .unwrap();
        assert!(summary.calls >= 40);
        assert_eq!(summary.rejected, 0);
        assert_eq!(summary.calls, summary.accepted + summary.deduplicated);

        for snap in &bank.observer().snapshots {
            for car in &snap.cars {
                assert_car_invariants(car, 10);
            }
            let mut keys: Vec<(u32, CallDirection)> =
                snap.pending_requests.iter().map(|r| (r.floor, r.direction)).collect();
            let len = keys.len();
            keys.sort_by_key(|&(f, d)| (f, d == CallDirection::Up));
            keys.dedup();
            assert_eq!(keys.len(), len, "duplicate pending request");
        }

        bank.run_for(Duration::from_secs(600), tick).unwrap();
        // Only calls a car passed through may still wait, and no car has
        // stopped at their floor since they were made.
        for r in bank.pending_requests() {
            let stop = format!(" stopped at floor {}", r.floor);
            assert!(
                !bank.observer().events.iter().any(|e| e.time >= r.created_at && e.message.ends_with(&stop)),
                "pending call survived a stop: {r:?}"
            );
        }
        assert!(bank.cars().iter().all(|c| c.destinations().is_empty()
            && c.motion() == MotionState::Idle
            && c.direction() == Direction::Idle));
    }
}
