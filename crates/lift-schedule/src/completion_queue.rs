//! `CompletionQueue` — one-shot delayed completions on virtual time.
//!
//! Entries are ordered by `(fire_at, generation, car)`.  Two completions for
//! the same key (rare: a travel notice and a loading completion landing on
//! the same millisecond for one car) fire in insertion order.
//!
//! `BTreeMap` gives O(log W) insert and pop where W = number of distinct
//! keys enqueued; W is bounded by roughly two entries per car.

use std::collections::BTreeMap;

use lift_core::{CarId, SimTime};

/// What to do when a completion fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    /// `Loading → Idle` for the car, recomputing its direction.
    LoadingDone,
    /// Cosmetic: re-emit a snapshot after a one-floor move.  Changes no state.
    TravelNotice,
}

/// A scheduled completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub fire_at:    SimTime,
    pub generation: u64,
    pub car:        CarId,
    pub kind:       CompletionKind,
}

type Key = (SimTime, u64, CarId);

/// Priority queue of completions ordered by fire time.
#[derive(Default, Debug)]
pub struct CompletionQueue {
    inner: BTreeMap<Key, Vec<CompletionKind>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl CompletionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, completion: Completion) {
        let key = (completion.fire_at, completion.generation, completion.car);
        self.inner.entry(key).or_default().push(completion.kind);
        self.total += 1;
    }

    /// Remove and return the earliest completion with `fire_at <= now`.
    pub fn pop_due(&mut self, now: SimTime) -> Option<Completion> {
        let mut entry = self.inner.first_entry()?;
        let (fire_at, generation, car) = *entry.key();
        if fire_at > now {
            return None;
        }

        let kinds = entry.get_mut();
        let kind = kinds.remove(0);
        if kinds.is_empty() {
            entry.remove();
        }
        self.total -= 1;

        Some(Completion { fire_at, generation, car, kind })
    }

    /// The earliest fire time, or `None` if empty.
    pub fn next_fire_time(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|&(t, _, _)| t)
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
