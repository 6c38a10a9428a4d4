//! The `TraceWriter` trait implemented by output backends.

use crate::{OutputResult, TickSummaryRow, VesselSnapshotRow};

/// A sink for trace rows.
///
/// Errors are stored by [`TraceObserver`][crate::TraceObserver] and
/// retrieved with its `take_error`.
pub trait TraceWriter {
    /// Write one row per vessel.
    fn write_snapshots(&mut self, rows: &[VesselSnapshotRow]) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush everything written so far.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
