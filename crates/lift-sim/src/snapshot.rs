//! Owned point-in-time copies of the whole bank.

use lift_car::CarSnapshot;
use lift_core::{CarId, SimTime};

use crate::{LogEntry, PendingRequest};

/// What produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapshotCause {
    /// A free-form log write ([`Controller::note`][crate::Controller::note]).
    Log,
    /// An accepted hall call.
    Request,
    /// The end of the numbered tick.
    Tick(u64),
    /// A delayed completion for this car fired.
    Completion(CarId),
    Reset,
    /// Built on request by [`Controller::state`][crate::Controller::state].
    Query,
}

/// Full bank state.  Nothing in here borrows from the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub time:             SimTime,
    pub generation:       u64,
    pub cause:            SnapshotCause,
    /// Ascending car id.
    pub cars:             Vec<CarSnapshot>,
    /// Oldest first.
    pub pending_requests: Vec<PendingRequest>,
    /// Oldest first, at most the log capacity.
    pub recent_log:       Vec<LogEntry>,
}

impl Snapshot {
    pub fn car(&self, id: CarId) -> Option<&CarSnapshot> {
        self.cars.get(id.index()).filter(|c| c.id == id)
    }
}
