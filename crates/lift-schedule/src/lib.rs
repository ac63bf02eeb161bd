//! `lift-schedule` — everything that happens *later*: delayed car
//! completions and incoming hall-call traffic.
//!
//! # Crate layout
//!
//! | Module               | Contents                                                  |
//! |----------------------|-----------------------------------------------------------|
//! | [`completion_queue`] | `CompletionQueue` keyed by `(fire_at, generation, car)`   |
//! | [`traffic`]          | `HallCall`, `TrafficSource`, `RandomTraffic`, `ScriptedTraffic` |
//! | [`loader`]           | `load_calls_csv`, `load_calls_reader`                     |
//! | [`error`]            | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Cooperative timers
//!
//! There are no OS timers.  The controller pushes a [`Completion`] when a car
//! starts loading or departs a floor, and drains due entries while it
//! advances virtual time.  Each entry carries the controller generation it
//! was scheduled under; a reset bumps the generation and the controller
//! drops mismatched entries when they come due.

pub mod completion_queue;
pub mod error;
pub mod loader;
pub mod traffic;


pub use completion_queue::{Completion, CompletionKind, CompletionQueue};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_calls_csv, load_calls_reader};
pub use traffic::{HallCall, NoTraffic, RandomTraffic, ScriptedTraffic, TrafficSource};
