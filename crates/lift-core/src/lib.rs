//! `lift-core` — foundational types for the `rust_lift` elevator bank simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CarId`                                               |
//! | [`motion`]      | `Direction`, `CallDirection`, `MotionState`           |
//! | [`time`]        | `SimTime`, `SimClock`                                 |
//! | [`config`]      | `BankConfig`                                          |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types; required to load `BankConfig` from JSON. |

pub mod config;
pub mod error;
pub mod ids;
pub mod motion;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BankConfig;
pub use error::{LiftError, LiftResult};
pub use ids::CarId;
pub use motion::{CallDirection, Direction, MotionState};
pub use rng::SimRng;
pub use time::{SimClock, SimTime};
