//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CarStateRow, EventRow, OutputResult};

/// Trait implemented by trace backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with [`BankOutputObserver::take_error`][crate::BankOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one row per car.
    fn write_car_states(&mut self, rows: &[CarStateRow]) -> OutputResult<()>;

    /// Write one event log line.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
