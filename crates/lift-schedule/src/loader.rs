//! CSV hall-call loader.
//!
//! # CSV format
//!
//! One row per button press, in any order.
//!
//! ```csv
//! at_ms,floor,direction
//! 0,7,up
//! 2500,3,down
//! 2500,1,up
//! ```
//!
//! `direction` is `up` or `down` (any case).  Floors are not range-checked
//! here; the controller rejects out-of-range calls when they are injected.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{CallDirection, SimTime};

use crate::{HallCall, ScheduleError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CallRecord {
    at_ms:     u64,
    floor:     u32,
    direction: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load hall calls from a CSV file.
pub fn load_calls_csv(path: &Path) -> Result<Vec<HallCall>, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_calls_reader(file)
}

/// Like [`load_calls_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a script.
pub fn load_calls_reader<R: Read>(reader: R) -> Result<Vec<HallCall>, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut calls = Vec::new();

    for result in csv_reader.deserialize::<CallRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let direction: CallDirection = row
            .direction
            .parse()
            .map_err(|e: lift_core::LiftError| ScheduleError::Parse(e.to_string()))?;
        calls.push(HallCall {
            at:    SimTime::from_millis(row.at_ms),
            floor: row.floor,
            direction,
        });
    }

    Ok(calls)
}
