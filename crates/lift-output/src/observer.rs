//! `BankOutputObserver<W>` — bridges `BankObserver` to an `OutputWriter`.

use lift_sim::{BankObserver, LogEntry, Snapshot, SnapshotCause};

use crate::row::{CarStateRow, EventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`BankObserver`] that writes per-car rows at the end of every tick and
/// one row per event log line to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `BankObserver`
/// methods have no return value.  After the run, call
/// [`finish`][Self::finish] and check [`take_error`][Self::take_error].
pub struct BankOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> BankOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Flush the writer.  Idempotent.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> BankObserver for BankOutputObserver<W> {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        let SnapshotCause::Tick(tick) = snapshot.cause else {
            return;
        };
        let time_ms = snapshot.time.as_millis();
        let rows: Vec<CarStateRow> = snapshot
            .cars
            .iter()
            .map(|car| CarStateRow::from_snapshot(tick, time_ms, car))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_car_states(&rows);
            self.store_err(result);
        }
    }

    fn on_event(&mut self, entry: &LogEntry) {
        let result = self.writer.write_event(&EventRow::from(entry));
        self.store_err(result);
    }
}
