//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `car_states.csv`
//! - `event_log.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CarStateRow, EventRow, OutputResult};

/// Writes a bank trace to two CSV files.
pub struct CsvWriter {
    car_states: Writer<File>,
    events:     Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create the output directory if needed, open (or truncate) the two CSV
    /// files and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut car_states = Writer::from_path(dir.join("car_states.csv"))?;
        car_states.write_record([
            "tick", "time_ms", "car_id", "floor", "direction", "motion", "destinations",
            "next_destination",
        ])?;

        let mut events = Writer::from_path(dir.join("event_log.csv"))?;
        events.write_record(["time_ms", "timestamp", "message"])?;

        Ok(Self {
            car_states,
            events,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_car_states(&mut self, rows: &[CarStateRow]) -> OutputResult<()> {
        for row in rows {
            self.car_states.write_record(&[
                row.tick.to_string(),
                row.time_ms.to_string(),
                row.car_id.to_string(),
                row.floor.to_string(),
                row.direction.to_string(),
                row.motion.to_string(),
                row.destinations.clone(),
                row.next_destination.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record([
            row.time_ms.to_string().as_str(),
            row.timestamp.as_str(),
            row.message.as_str(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.car_states.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
