//! `lift-dispatch` — decides which car serves a new hall call.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`policy`]  | `DispatchPolicy` trait, `select_car`, `Assignment`              |
//! | [`cost`]    | `CostDispatcher` — distance plus misalignment penalties         |
//! | [`nearest`] | `NearestCar` — pure distance, ignores direction                 |
//! | [`cache`]   | `ScoreCache` — explicit memo of scores keyed by car signature   |
//!
//! # Design notes
//!
//! Scoring is a pure function of `(&Car, floor, direction)`.  Selection
//! scores every car (none are skipped, whatever their motion state) and
//! keeps the first minimum in id order, so ties go to the lowest car id.
//! Committing the winner (`Car::add_destination`) is the caller's job; this
//! crate never mutates a car.

pub mod cache;
pub mod cost;
pub mod nearest;
pub mod policy;


pub use cache::{ScoreCache, ScoreKey};
pub use cost::CostDispatcher;
pub use nearest::NearestCar;
pub use policy::{Assignment, DispatchPolicy, select_car};
