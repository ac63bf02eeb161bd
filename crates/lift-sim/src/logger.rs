//! Structured event records and the injectable logger seam.
//!
//! Every [`BankEvent`] the controller produces goes to its [`EventLogger`].
//! Events that are part of the bank's visible history are also appended to
//! the [`EventLog`][crate::EventLog]; their `Display` text is the log line.

use std::fmt;

use log::Level;

use lift_core::{CallDirection, CarId, Direction, SimTime};

/// `log` target used by [`FacadeLogger`].
pub const LOG_TARGET: &str = "lift_sim";

/// Something that happened in the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankEvent {
    RequestReceived { floor: u32, direction: CallDirection },
    RequestRejected { floor: u32, direction: CallDirection, total_floors: u32 },
    RequestDeduplicated { floor: u32, direction: CallDirection },
    Assigned { car: CarId, floor: u32 },
    AlreadyAtFloor { car: CarId, floor: u32 },
    Stopped { car: CarId, floor: u32 },
    ReadyToMove { car: CarId, floor: u32 },
    Arrived { car: CarId, floor: u32 },
    Departed { car: CarId, direction: Direction, from: u32 },
    TravelNotice { car: CarId, floor: u32 },
    StaleCompletion { car: CarId, scheduled: u64, current: u64 },
    Reset,
    Note(String),
}

impl BankEvent {
    /// Severity used for the [`EventLogger`] record.
    pub fn level(&self) -> Level {
        match self {
            BankEvent::RequestRejected { .. } => Level::Warn,
            BankEvent::RequestDeduplicated { .. }
            | BankEvent::TravelNotice { .. }
            | BankEvent::StaleCompletion { .. } => Level::Debug,
            _ => Level::Info,
        }
    }
}

impl fmt::Display for BankEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankEvent::RequestReceived { floor, direction } => {
                write!(f, "{direction} request received on floor {floor}")
            }
            BankEvent::RequestRejected { floor, direction, total_floors } => write!(
                f,
                "{direction} request on floor {floor} rejected: building has floors 1-{total_floors}"
            ),
            BankEvent::RequestDeduplicated { floor, direction } => {
                write!(f, "{direction} request on floor {floor} already pending")
            }
            BankEvent::Assigned { car, floor } => write!(f, "Elevator {car} assigned to floor {floor}"),
            BankEvent::AlreadyAtFloor { car, floor } => write!(f, "Elevator {car} already at floor {floor}"),
            BankEvent::Stopped { car, floor } => write!(f, "Elevator {car} stopped at floor {floor}"),
            BankEvent::ReadyToMove { car, floor } => {
                write!(f, "Elevator {car} ready to move from floor {floor}")
            }
            BankEvent::Arrived { car, floor } => write!(f, "Elevator {car} arrived at floor {floor}"),
            BankEvent::Departed { car, direction, from } => {
                write!(f, "Elevator {car} moving {direction} from floor {from}")
            }
            BankEvent::TravelNotice { car, floor } => {
                write!(f, "Elevator {car} travel notice at floor {floor}")
            }
            BankEvent::StaleCompletion { car, scheduled, current } => write!(
                f,
                "Dropped completion for elevator {car} from generation {scheduled} (now {current})"
            ),
            BankEvent::Reset => f.write_str("Simulation reset"),
            BankEvent::Note(message) => f.write_str(message),
        }
    }
}

/// Receives every [`BankEvent`] with its severity and virtual time.
pub trait EventLogger {
    fn record(&mut self, level: Level, time: SimTime, event: &BankEvent);
}

/// Forwards events to the `log` facade under [`LOG_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeLogger;

impl EventLogger for FacadeLogger {
    fn record(&mut self, level: Level, time: SimTime, event: &BankEvent) {
        log::log!(target: LOG_TARGET, level, "{time} {event}");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl EventLogger for NullLogger {
    fn record(&mut self, _level: Level, _time: SimTime, _event: &BankEvent) {}
}
