//! Observer trait for UIs, tracing and data collection.

use crate::{LogEntry, Snapshot};

/// Callbacks invoked by the [`Controller`][crate::Controller].
///
/// Both methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — tick printer
///
/// ```rust,ignore
/// struct TickPrinter;
///
/// impl BankObserver for TickPrinter {
///     fn on_snapshot(&mut self, snapshot: &Snapshot) {
///         if let SnapshotCause::Tick(n) = snapshot.cause {
///             println!("tick {n}: {} pending", snapshot.pending_requests.len());
///         }
///     }
/// }
/// ```
pub trait BankObserver {
    /// Called once after every state-mutating operation: a note, an accepted
    /// request, a tick, a delayed completion, a reset.  Several snapshots per
    /// tick interval are normal.
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    /// Called for each line appended to the event log, before the snapshot
    /// of the operation that wrote it.
    fn on_event(&mut self, _entry: &LogEntry) {}
}

/// A [`BankObserver`] that does nothing.
pub struct NoopObserver;

impl BankObserver for NoopObserver {}
