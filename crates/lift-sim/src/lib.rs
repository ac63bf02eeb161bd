//! `lift-sim` — the bank controller for the rust_lift simulator.
//!
//! # Tick rules
//!
//! ```text
//! for car in cars (ascending id):
//!   ① Stop      — current floor is queued: → Loading, drop it from the queue,
//!                 clear pending calls at that floor, schedule LoadingDone.
//!   ② Arrive    — car is Moving: → Idle at the new floor.
//!   ③ Depart    — car is Idle with work: move one floor, schedule a
//!                 TravelNotice (cosmetic, never gates the next step).
//! emit one Tick snapshot
//! ```
//!
//! A car moves at most one floor per tick; a multi-floor leg alternates
//! depart and arrive ticks.  Loading ends only when virtual time passes the
//! loading latency (`Controller::advance_by`).
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`controller`]  | `Controller`, `RunSummary`                               |
//! | [`builder`]     | `BankBuilder`                                            |
//! | [`request`]     | `PendingRequest`, `RequestOutcome`, `RejectReason`       |
//! | [`event_log`]   | `EventLog`, `LogEntry` (bounded FIFO, 100 lines)         |
//! | [`logger`]      | `BankEvent`, `EventLogger`, `FacadeLogger`, `NullLogger` |
//! | [`observer`]    | `BankObserver`, `NoopObserver`                           |
//! | [`snapshot`]    | `Snapshot`, `SnapshotCause`                              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{BankConfig, CallDirection};
//! use lift_sim::BankBuilder;
//!
//! let mut bank = BankBuilder::new(BankConfig::default()).build()?;
//! bank.request_elevator(7, CallDirection::Up);
//! bank.run_for(Duration::from_secs(60), Duration::from_secs(1))?;
//! ```

pub mod builder;
pub mod controller;
pub mod error;
pub mod event_log;
pub mod logger;
pub mod observer;
pub mod request;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::BankBuilder;
pub use controller::{Controller, RunSummary};
pub use error::{SimError, SimResult};
pub use event_log::{EventLog, LogEntry};
pub use logger::{BankEvent, EventLogger, FacadeLogger, LOG_TARGET, NullLogger};
pub use observer::{BankObserver, NoopObserver};
pub use request::{PendingRequest, RejectReason, RequestOutcome};
pub use snapshot::{Snapshot, SnapshotCause};
