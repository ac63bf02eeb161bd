//! Bank configuration.

use std::time::Duration;

use crate::{LiftError, LiftResult};

/// Top-level configuration for one elevator bank.
///
/// Fixed for the lifetime of a controller instance.  Typically built in code
/// or loaded from a JSON file by the application crate (requires the `serde`
/// feature).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BankConfig {
    /// Number of cars in the bank.  Must be at least 1.
    pub car_count: usize,

    /// Number of floors served, numbered `1..=total_floors`.  Must be at
    /// least 2.
    pub total_floors: u32,

    /// How long a car stays in `Loading` after stopping.
    pub loading_latency_ms: u64,

    /// Delay before the cosmetic "still travelling" notification after a
    /// one-floor move.  Does not gate movement.
    pub travel_latency_ms: u64,

    /// Time of day (seconds after midnight) at virtual time zero.  Only
    /// affects log timestamps.
    pub start_of_day_secs: u32,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            car_count:          4,
            total_floors:       10,
            loading_latency_ms: 10_000,
            travel_latency_ms:  10_000,
            start_of_day_secs:  8 * 3_600,
        }
    }
}

impl BankConfig {
    /// Check the structural constraints.  This is the only fatal validation
    /// in the simulator; everything else is reported and skipped.
    pub fn validate(&self) -> LiftResult<()> {
        if self.car_count < 1 {
            return Err(LiftError::Config(format!(
                "car_count must be at least 1, got {}",
                self.car_count
            )));
        }
        if u32::try_from(self.car_count).is_err() {
            return Err(LiftError::Config(format!(
                "car_count {} does not fit a car id",
                self.car_count
            )));
        }
        if self.total_floors < 2 {
            return Err(LiftError::Config(format!(
                "total_floors must be at least 2, got {}",
                self.total_floors
            )));
        }
        if self.start_of_day_secs >= 86_400 {
            return Err(LiftError::Config(format!(
                "start_of_day_secs must be below 86400, got {}",
                self.start_of_day_secs
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn loading_latency(&self) -> Duration {
        Duration::from_millis(self.loading_latency_ms)
    }

    #[inline]
    pub fn travel_latency(&self) -> Duration {
        Duration::from_millis(self.travel_latency_ms)
    }

    /// `true` if `floor` is inside `1..=total_floors`.
    #[inline]
    pub fn is_valid_floor(&self, floor: u32) -> bool {
        (1..=self.total_floors).contains(&floor)
    }
}
