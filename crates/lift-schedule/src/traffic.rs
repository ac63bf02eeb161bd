//! Hall-call traffic sources.
//!
//! A [`TrafficSource`] is polled by the driver before each tick and yields
//! the calls that have come due.  The controller treats them exactly like
//! button presses.

use std::collections::VecDeque;
use std::time::Duration;

use lift_core::{CallDirection, SimRng, SimTime};

/// One hall-call button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HallCall {
    pub at:        SimTime,
    pub floor:     u32,
    pub direction: CallDirection,
}

/// Something that produces hall calls over virtual time.
pub trait TrafficSource {
    /// Return every call with `at <= now` not yet returned, in time order.
    fn due_calls(&mut self, now: SimTime) -> Vec<HallCall>;
}

/// A [`TrafficSource`] that never calls.
pub struct NoTraffic;

impl TrafficSource for NoTraffic {
    fn due_calls(&mut self, _now: SimTime) -> Vec<HallCall> {
        vec![]
    }
}

// ── RandomTraffic ─────────────────────────────────────────────────────────────

/// Seeded random hall calls.
///
/// - floor uniform in `1..=total_floors`;
/// - the top floor always calls `Down`, floor 1 always `Up`, any other floor
///   picks a direction with a fair coin;
/// - the first call is at time zero, each next one after a uniform gap in
///   `[min_gap, max_gap)`.
pub struct RandomTraffic {
    rng:          SimRng,
    total_floors: u32,
    min_gap_ms:   u64,
    max_gap_ms:   u64,
    next_at:      SimTime,
}

impl RandomTraffic {
    pub const DEFAULT_MIN_GAP_MS: u64 = 5_000;
    pub const DEFAULT_MAX_GAP_MS: u64 = 15_000;

    pub fn new(seed: u64, total_floors: u32) -> Self {
        Self {
            rng: SimRng::new(seed),
            total_floors,
            min_gap_ms: Self::DEFAULT_MIN_GAP_MS,
            max_gap_ms: Self::DEFAULT_MAX_GAP_MS,
            next_at: SimTime::ZERO,
        }
    }

    /// Override the inter-arrival gap range.  `max` is clamped to at least
    /// `min + 1` ms.
    pub fn with_gap(mut self, min: Duration, max: Duration) -> Self {
        self.min_gap_ms = min.as_millis() as u64;
        self.max_gap_ms = (max.as_millis() as u64).max(self.min_gap_ms + 1);
        self
    }

    /// Time of the next call.
    pub fn next_at(&self) -> SimTime {
        self.next_at
    }

    /// Draw one call at `at`.
    pub fn random_call(&mut self, at: SimTime) -> HallCall {
        let floor = self.rng.gen_range(1..=self.total_floors);
        let direction = if floor == self.total_floors {
            CallDirection::Down
        } else if floor == 1 {
            CallDirection::Up
        } else if self.rng.gen_bool(0.5) {
            CallDirection::Up
        } else {
            CallDirection::Down
        };
        HallCall { at, floor, direction }
    }
}

impl TrafficSource for RandomTraffic {
    fn due_calls(&mut self, now: SimTime) -> Vec<HallCall> {
        let mut calls = Vec::new();
        while self.next_at <= now {
            let at = self.next_at;
            calls.push(self.random_call(at));
            let gap = self.rng.gen_range(self.min_gap_ms..self.max_gap_ms);
            self.next_at = at + Duration::from_millis(gap);
        }
        calls
    }
}

// ── ScriptedTraffic ───────────────────────────────────────────────────────────

/// Replays a fixed list of calls, e.g. from [`load_calls_csv`][crate::load_calls_csv].
pub struct ScriptedTraffic {
    calls: VecDeque<HallCall>,
}

impl ScriptedTraffic {
    /// Calls are stably sorted by time, so same-time calls keep file order.
    pub fn new(mut calls: Vec<HallCall>) -> Self {
        calls.sort_by_key(|c| c.at);
        Self { calls: calls.into() }
    }

    /// Calls not yet emitted.
    pub fn remaining(&self) -> usize {
        self.calls.len()
    }
}

impl TrafficSource for ScriptedTraffic {
    fn due_calls(&mut self, now: SimTime) -> Vec<HallCall> {
        let mut calls = Vec::new();
        while self.calls.front().is_some_and(|c| c.at <= now) {
            if let Some(call) = self.calls.pop_front() {
                calls.push(call);
            }
        }
        calls
    }
}
