//! `ScoreCache` — memoised dispatch scores.
//!
//! The key holds every car field a [`DispatchPolicy`][crate::DispatchPolicy]
//! may read, so a stale entry can never be returned for a car whose state
//! changed.  Entries stay valid across ticks and commits: a car that returns
//! to a signature it had before reuses the old score.  The key space is
//! bounded by cars × floors³, so the owner only calls
//! [`ScoreCache::invalidate`] when the whole bank is rebuilt.

use rustc_hash::FxHashMap;

use lift_car::Car;
use lift_core::{CallDirection, CarId, Direction};

/// Everything a score depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreKey {
    pub car:           CarId,
    pub current_floor: u32,
    pub direction:     Direction,
    pub queue_len:     usize,
    pub floor:         u32,
    pub request:       CallDirection,
}

impl ScoreKey {
    pub fn new(car: &Car, floor: u32, request: CallDirection) -> Self {
        Self {
            car:           car.id(),
            current_floor: car.current_floor(),
            direction:     car.direction(),
            queue_len:     car.queue_len(),
            floor,
            request,
        }
    }
}

/// Memo of `ScoreKey → score` with hit/miss counters.
#[derive(Debug, Default)]
pub struct ScoreCache {
    scores: FxHashMap<ScoreKey, u32>,
    hits:   u64,
    misses: u64,
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached score for `car`'s current signature, or compute,
    /// store, and return it.
    pub fn get_or_compute(
        &mut self,
        car:     &Car,
        floor:   u32,
        request: CallDirection,
        compute: impl FnOnce() -> u32,
    ) -> u32 {
        let key = ScoreKey::new(car, floor, request);
        if let Some(&score) = self.scores.get(&key) {
            self.hits += 1;
            return score;
        }
        self.misses += 1;
        let score = compute();
        self.scores.insert(key, score);
        score
    }

    /// Drop every entry.  Counters are kept.
    pub fn invalidate(&mut self) {
        self.scores.clear();
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
