//! Hall calls waiting for service and the result of placing one.

use lift_core::{CallDirection, CarId, SimTime};
use thiserror::Error;

/// An accepted hall call that no car has stopped for yet.
///
/// At most one per `(floor, direction)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingRequest {
    pub floor:      u32,
    pub direction:  CallDirection,
    pub created_at: SimTime,
}

/// Why a hall call was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("floor {floor} is outside 1..={total_floors}")]
    InvalidFloor { floor: u32, total_floors: u32 },

    #[error("the bank has no cars")]
    NoCarAvailable,
}

/// Result of [`Controller::request_elevator`][crate::Controller::request_elevator].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Recorded and assigned to `car`.
    Accepted { car: CarId },
    /// Not recorded; nothing changed.
    Rejected(RejectReason),
    /// An identical call is already pending; nothing changed.
    Deduplicated,
}

impl RequestOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, RequestOutcome::Accepted { .. })
    }

    /// The assigned car, if accepted.
    pub fn car(&self) -> Option<CarId> {
        match *self {
            RequestOutcome::Accepted { car } => Some(car),
            _ => None,
        }
    }
}
