//! `lift-car` — one elevator car: position, direction, motion state, and an
//! ordered destination queue.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`car`]     | `Car` state machine, `CarSnapshot`                          |
//! | [`sweep`]   | SCAN ordering of a destination queue                        |
//! | [`error`]   | `CarError`, `CarResult<T>`                                  |
//!
//! # State machine
//!
//! ```text
//!            move_one_floor                complete_movement
//!   Idle ───────────────────▶ Moving ───────────────────────▶ Idle
//!    │                                                          ▲
//!    │ stop_at_floor (current floor queued)   complete_loading  │
//!    └─────────────────────▶ Loading ───────────────────────────┘
//! ```
//!
//! A car never mutates itself on a timer.  The controller in `lift-sim`
//! decides when each transition fires; this crate only guarantees that each
//! transition leaves the car consistent:
//!
//! - the destination queue holds no duplicates, and holds the current floor
//!   only as its head between arriving there and stopping,
//! - the queue head is the next floor to serve under the current direction,
//! - `current_floor` stays inside `1..=total_floors`.

pub mod car;
pub mod error;
pub mod sweep;


pub use car::{Car, CarSnapshot};
pub use error::{CarError, CarResult};
