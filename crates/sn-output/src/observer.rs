//! `TraceObserver<W>` — bridges `SimObserver` to a `TraceWriter`.

use sn_core::Tick;
use sn_fleet::Vessel;
use sn_sim::{PortMap, SimObserver, TickSummary};

use crate::row::{TickSummaryRow, VesselSnapshotRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one snapshot row per vessel and one summary
/// row per tick.
///
/// Observer hooks cannot return errors, so the first write failure is kept
/// and later ones are dropped.  Check it with [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer, reporting a stored error first if there is one.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> SimObserver for TraceObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:            tick.0,
            moving_vessels:  summary.moving_vessels as u64,
            port_fuel_total: summary.port_fuel_total,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, _ports: &PortMap, vessels: &[Vessel]) {
        if vessels.is_empty() {
            return;
        }
        let rows: Vec<VesselSnapshotRow> =
            vessels.iter().map(|v| VesselSnapshotRow::capture(tick, v)).collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }
}
