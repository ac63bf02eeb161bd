//! Plain data row types written by output backends.

use lift_car::CarSnapshot;
use lift_core::{Direction, MotionState};
use lift_sim::LogEntry;

/// One car's state at the end of a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarStateRow {
    pub tick:             u64,
    pub time_ms:          u64,
    pub car_id:           u32,
    pub floor:            u32,
    pub direction:        Direction,
    pub motion:           MotionState,
    /// Queued floors in service order, space separated.
    pub destinations:     String,
    /// `0` when the queue is empty.
    pub next_destination: u32,
}

impl CarStateRow {
    pub fn from_snapshot(tick: u64, time_ms: u64, car: &CarSnapshot) -> Self {
        let destinations = car
            .destinations
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            tick,
            time_ms,
            car_id: car.id.0,
            floor: car.current_floor,
            direction: car.direction,
            motion: car.motion,
            destinations,
            next_destination: car.next_destination.unwrap_or(0),
        }
    }
}

/// One event log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub time_ms:   u64,
    pub timestamp: String,
    pub message:   String,
}

impl From<&LogEntry> for EventRow {
    fn from(entry: &LogEntry) -> Self {
        Self {
            time_ms:   entry.time.as_millis(),
            timestamp: entry.timestamp.clone(),
            message:   entry.message.clone(),
        }
    }
}
