//! Virtual time model.
//!
//! # Design
//!
//! Time is a monotonically increasing millisecond counter, `SimTime`.  It is
//! advanced explicitly by the driver (`Controller::advance_by`), never read
//! from the OS clock, so a run is fully reproducible and tests can jump
//! forward by exactly one loading latency.
//!
//! Log lines show a time of day.  `SimClock` maps virtual time onto a day
//! that starts at `start_of_day_secs`:
//!
//!   time_of_day = (start_of_day_secs + now_ms / 1000) mod 86_400

use std::fmt;
use std::time::Duration;

const SECS_PER_DAY: u64 = 86_400;

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute virtual timestamp in milliseconds since simulation start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    #[inline]
    pub fn from_millis(ms: u64) -> SimTime {
        SimTime(ms)
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Time elapsed from `earlier` to `self`, zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: SimTime) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

impl std::ops::Add<Duration> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: Duration) -> SimTime {
        SimTime(self.0.saturating_add(u64::try_from(rhs.as_millis()).unwrap_or(u64::MAX)))
    }
}

impl std::ops::Sub for SimTime {
    type Output = Duration;
    #[inline]
    fn sub(self, rhs: SimTime) -> Duration {
        self.since(rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T+{}ms", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The controller's clock: current virtual time plus the wall-clock-looking
/// time of day it corresponds to.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Seconds after midnight shown for `SimTime::ZERO`.
    pub start_of_day_secs: u32,
    /// Current virtual time.
    pub now: SimTime,
}

impl SimClock {
    pub fn new(start_of_day_secs: u32) -> Self {
        Self {
            start_of_day_secs,
            now: SimTime::ZERO,
        }
    }

    /// Move the clock forward to `t`.  Moving backwards is ignored.
    #[inline]
    pub fn advance_to(&mut self, t: SimTime) {
        if t > self.now {
            self.now = t;
        }
    }

    #[inline]
    pub fn advance_by(&mut self, d: Duration) {
        self.now = self.now + d;
    }

    /// Break `t` into (hour, minute, second) of the simulated day.
    pub fn hms_at(&self, t: SimTime) -> (u32, u32, u32) {
        let secs = (self.start_of_day_secs as u64 + t.0 / 1000) % SECS_PER_DAY;
        let h = (secs / 3_600) as u32;
        let m = ((secs % 3_600) / 60) as u32;
        let s = (secs % 60) as u32;
        (h, m, s)
    }

    /// `HH:MM:SS` for an arbitrary time.
    pub fn timestamp_at(&self, t: SimTime) -> String {
        let (h, m, s) = self.hms_at(t);
        format!("{h:02}:{m:02}:{s:02}")
    }

    /// `HH:MM:SS` for the current time.
    pub fn timestamp(&self) -> String {
        self.timestamp_at(self.now)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.now, self.timestamp())
    }
}
