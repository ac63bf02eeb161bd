//! The `Controller` and its tick loop.

use std::time::Duration;

use lift_car::{Car, CarError};
use lift_core::{BankConfig, CallDirection, CarId, Direction, MotionState, SimClock, SimTime};
use lift_dispatch::{DispatchPolicy, ScoreCache, select_car};
use lift_schedule::{Completion, CompletionKind, CompletionQueue, TrafficSource};

use crate::{
    BankEvent, BankObserver, EventLog, EventLogger, NoopObserver, PendingRequest, RejectReason,
    RequestOutcome, SimError, SimResult, Snapshot, SnapshotCause,
};

// ── Per-car step outcome ──────────────────────────────────────────────────────

/// What one car did during a tick.  Built while the car is borrowed, acted
/// on (logging, scheduling) afterwards.
enum CarStep {
    Stopped { floor: u32 },
    Arrived { floor: u32 },
    Departed { from: u32, direction: Direction },
}

/// Counters returned by [`Controller::run_for`] and
/// [`Controller::run_with_traffic`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks:        u64,
    pub calls:        u64,
    pub accepted:     u64,
    pub deduplicated: u64,
    pub rejected:     u64,
}

// ── Controller ────────────────────────────────────────────────────────────────

/// Owns every car, the pending hall calls and the event log, and is the only
/// thing that mutates them.
///
/// Driven from outside: hall calls arrive through
/// [`request_elevator`][Self::request_elevator], the driver calls
/// [`tick`][Self::tick] on a fixed cadence and moves virtual time with
/// [`advance_by`][Self::advance_by], which fires due loading and travel
/// completions.  Each completion carries the generation it was scheduled
/// under; [`reset`][Self::reset] bumps the generation, so completions from
/// before the reset do nothing when they come due.
///
/// Create via [`BankBuilder`][crate::BankBuilder].
pub struct Controller<O: BankObserver = NoopObserver> {
    pub(crate) config:       BankConfig,
    pub(crate) clock:        SimClock,
    pub(crate) cars:         Vec<Car>,
    /// The car set as built, restored by `reset`.
    pub(crate) initial_cars: Vec<Car>,
    pub(crate) pending:      Vec<PendingRequest>,
    pub(crate) log:          EventLog,
    pub(crate) completions:  CompletionQueue,
    pub(crate) scores:       ScoreCache,
    pub(crate) generation:   u64,
    pub(crate) ticks:        u64,
    pub(crate) policy:       Box<dyn DispatchPolicy>,
    pub(crate) logger:       Box<dyn EventLogger>,
    pub(crate) observer:     O,
}

impl<O: BankObserver> Controller<O> {
    // ── Read access ───────────────────────────────────────────────────────

    /// Cars in ascending id order.
    #[inline]
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.get(id.index()).filter(|c| c.id() == id)
    }

    /// Pending hall calls, oldest first.
    #[inline]
    pub fn pending_requests(&self) -> &[PendingRequest] {
        &self.pending
    }

    #[inline]
    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    #[inline]
    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ticks run since construction or the last reset.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Fire time of the earliest outstanding completion.
    pub fn next_completion(&self) -> Option<SimTime> {
        self.completions.next_fire_time()
    }

    /// Outstanding completions, stale ones included.
    pub fn scheduled_completions(&self) -> usize {
        self.completions.len()
    }

    #[inline]
    pub fn score_cache(&self) -> &ScoreCache {
        &self.scores
    }

    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[inline]
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// An owned snapshot of the current state.  Does not notify the observer.
    pub fn state(&self) -> Snapshot {
        self.snapshot(SnapshotCause::Query)
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Place a hall call at `floor`.
    ///
    /// Out-of-range floors are rejected and an identical pending call makes
    /// this a no-op.  Otherwise the call is recorded and assigned at once to
    /// the best-scoring car.
    pub fn request_elevator(&mut self, floor: u32, direction: CallDirection) -> RequestOutcome {
        let total_floors = self.config.total_floors;
        if !self.config.is_valid_floor(floor) {
            self.trace(BankEvent::RequestRejected { floor, direction, total_floors });
            return RequestOutcome::Rejected(RejectReason::InvalidFloor { floor, total_floors });
        }
        if self.pending.iter().any(|r| r.floor == floor && r.direction == direction) {
            self.trace(BankEvent::RequestDeduplicated { floor, direction });
            return RequestOutcome::Deduplicated;
        }

        self.pending.push(PendingRequest {
            floor,
            direction,
            created_at: self.clock.now,
        });
        self.record(BankEvent::RequestReceived { floor, direction });

        let outcome = self.dispatch(floor, direction);
        self.emit(SnapshotCause::Request);
        outcome
    }

    /// Score every car, commit the winner.
    fn dispatch(&mut self, floor: u32, direction: CallDirection) -> RequestOutcome {
        let Some(winner) = select_car(
            &*self.policy,
            &self.cars,
            floor,
            direction,
            Some(&mut self.scores),
        ) else {
            return RequestOutcome::Rejected(RejectReason::NoCarAvailable);
        };

        let car = &mut self.cars[winner.car.index()];
        let already_queued = car.destinations().contains(&floor);
        let passing = car.motion() == MotionState::Moving;
        let event = match car.add_destination(floor) {
            Ok(true) => BankEvent::Assigned { car: winner.car, floor },
            // A car passing through keeps going; the call stays pending.
            Ok(false) if already_queued || passing => BankEvent::Assigned { car: winner.car, floor },
            Ok(false) => {
                // Standing at the floor: the call is served where it is.
                self.pending.retain(|r| r.floor != floor);
                BankEvent::AlreadyAtFloor { car: winner.car, floor }
            }
            Err(CarError::InvalidFloor { floor, total_floors, .. }) => {
                return RequestOutcome::Rejected(RejectReason::InvalidFloor { floor, total_floors });
            }
        };
        self.record(event);

        RequestOutcome::Accepted { car: winner.car }
    }

    /// Append a free-form line to the event log.
    pub fn note(&mut self, message: impl Into<String>) {
        self.record(BankEvent::Note(message.into()));
        self.emit(SnapshotCause::Log);
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// One discrete step: every car, in ascending id order, either stops,
    /// completes a movement, or moves one floor.  Emits one snapshot.
    pub fn tick(&mut self) {
        self.ticks += 1;
        for index in 0..self.cars.len() {
            self.step_car(index);
        }
        self.emit(SnapshotCause::Tick(self.ticks));
    }

    fn step_car(&mut self, index: usize) {
        let car = &mut self.cars[index];
        let id = car.id();

        let step = if car.should_stop_at_current_floor() {
            car.stop_at_floor();
            CarStep::Stopped { floor: car.current_floor() }
        } else if car.motion() == MotionState::Moving {
            car.complete_movement();
            CarStep::Arrived { floor: car.current_floor() }
        } else if car.motion() == MotionState::Idle && car.next_destination().is_some() {
            let from = car.current_floor();
            if !car.move_one_floor() {
                return;
            }
            CarStep::Departed { from, direction: car.direction() }
        } else {
            return;
        };

        match step {
            CarStep::Stopped { floor } => {
                self.pending.retain(|r| r.floor != floor);
                self.record(BankEvent::Stopped { car: id, floor });
                self.schedule(id, self.config.loading_latency(), CompletionKind::LoadingDone);
            }
            CarStep::Arrived { floor } => {
                self.record(BankEvent::Arrived { car: id, floor });
            }
            CarStep::Departed { from, direction } => {
                self.record(BankEvent::Departed { car: id, direction, from });
                self.schedule(id, self.config.travel_latency(), CompletionKind::TravelNotice);
            }
        }
    }

    // ── Virtual time ──────────────────────────────────────────────────────

    /// Advance virtual time by `d`, firing every completion that comes due.
    pub fn advance_by(&mut self, d: Duration) {
        let target = self.clock.now + d;
        self.advance_to(target);
    }

    /// Advance virtual time to `target`, firing due completions in
    /// `(fire_at, generation, car)` order.  The clock reads each
    /// completion's fire time while it runs.  Going backwards is ignored.
    pub fn advance_to(&mut self, target: SimTime) {
        while let Some(completion) = self.completions.pop_due(target) {
            self.clock.advance_to(completion.fire_at);
            self.fire(completion);
        }
        self.clock.advance_to(target);
    }

    fn schedule(&mut self, car: CarId, delay: Duration, kind: CompletionKind) {
        self.completions.push(Completion {
            fire_at: self.clock.now + delay,
            generation: self.generation,
            car,
            kind,
        });
    }

    fn fire(&mut self, completion: Completion) {
        let Completion { generation, car: id, kind, .. } = completion;
        if generation != self.generation {
            self.trace(BankEvent::StaleCompletion {
                car:       id,
                scheduled: generation,
                current:   self.generation,
            });
            return;
        }
        let Some(car) = self.cars.get_mut(id.index()) else {
            return;
        };

        match kind {
            CompletionKind::LoadingDone => {
                if car.motion() != MotionState::Loading {
                    return;
                }
                car.complete_loading();
                let floor = car.current_floor();
                self.record(BankEvent::ReadyToMove { car: id, floor });
            }
            CompletionKind::TravelNotice => {
                let floor = car.current_floor();
                self.trace(BankEvent::TravelNotice { car: id, floor });
            }
        }
        self.emit(SnapshotCause::Completion(id));
    }

    // ── Drivers ───────────────────────────────────────────────────────────

    /// Run the cooperative loop for `duration`: advance by `tick_interval`,
    /// then tick, until less than one interval remains; then advance the
    /// rest of the way.
    pub fn run_for(&mut self, duration: Duration, tick_interval: Duration) -> SimResult<RunSummary> {
        self.run_loop(duration, tick_interval, None)
    }

    /// Like [`run_for`][Self::run_for], placing the calls `source` has due
    /// before each tick.
    pub fn run_with_traffic<T: TrafficSource>(
        &mut self,
        duration:      Duration,
        tick_interval: Duration,
        source:        &mut T,
    ) -> SimResult<RunSummary> {
        self.run_loop(duration, tick_interval, Some(source as &mut dyn TrafficSource))
    }

    fn run_loop(
        &mut self,
        duration:      Duration,
        tick_interval: Duration,
        mut source:    Option<&mut dyn TrafficSource>,
    ) -> SimResult<RunSummary> {
        if tick_interval.is_zero() {
            return Err(SimError::Config("tick interval must be positive".into()));
        }
        let end = self.clock.now + duration;
        let mut summary = RunSummary::default();

        while self.clock.now + tick_interval <= end {
            self.advance_by(tick_interval);
            if let Some(source) = source.as_deref_mut() {
                for call in source.due_calls(self.clock.now) {
                    summary.calls += 1;
                    match self.request_elevator(call.floor, call.direction) {
                        RequestOutcome::Accepted { .. } => summary.accepted += 1,
                        RequestOutcome::Deduplicated    => summary.deduplicated += 1,
                        RequestOutcome::Rejected(_)     => summary.rejected += 1,
                    }
                }
            }
            self.tick();
            summary.ticks += 1;
        }
        self.advance_to(end);

        Ok(summary)
    }

    // ── Reset ─────────────────────────────────────────────────────────────

    /// Discard every car and pending call, clear the log and retire all
    /// outstanding completions.  Virtual time keeps running.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.cars = self.initial_cars.clone();
        self.pending.clear();
        self.log.clear();
        self.scores.invalidate();
        self.ticks = 0;
        self.record(BankEvent::Reset);
        self.emit(SnapshotCause::Reset);
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Log `event` to the event log, the observer and the logger.
    fn record(&mut self, event: BankEvent) {
        self.logger.record(event.level(), self.clock.now, &event);
        let entry = self.log.push(self.clock.now, self.clock.timestamp(), event.to_string());
        self.observer.on_event(entry);
    }

    /// Send `event` to the logger only.
    fn trace(&mut self, event: BankEvent) {
        self.logger.record(event.level(), self.clock.now, &event);
    }

    fn snapshot(&self, cause: SnapshotCause) -> Snapshot {
        Snapshot {
            time: self.clock.now,
            generation: self.generation,
            cause,
            cars: self.cars.iter().map(Car::snapshot).collect(),
            pending_requests: self.pending.clone(),
            recent_log: self.log.iter().cloned().collect(),
        }
    }

    fn emit(&mut self, cause: SnapshotCause) {
        let snapshot = self.snapshot(cause);
        self.observer.on_snapshot(&snapshot);
    }
}
