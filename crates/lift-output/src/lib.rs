//! `lift-output` — trace writers for the rust_lift simulator.
//!
//! | Backend | Files created                       |
//! |---------|-------------------------------------|
//! | CSV     | `car_states.csv`, `event_log.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`BankOutputObserver`], which implements `lift_sim::BankObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{BankOutputObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut bank = BankBuilder::new(config)
//!     .observer(BankOutputObserver::new(writer))
//!     .build()?;
//! bank.run_for(Duration::from_secs(600), Duration::from_secs(1))?;
//! let mut obs = bank.into_observer();
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::BankOutputObserver;
pub use row::{CarStateRow, EventRow};
pub use writer::OutputWriter;
