//! CSV trace backend.
//!
//! Creates two files in the configured directory:
//! - `vessel_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::TraceWriter;
use crate::{OutputResult, TickSummaryRow, VesselSnapshotRow};

pub const SNAPSHOT_FILE: &str = "vessel_snapshots.csv";
pub const SUMMARY_FILE: &str = "tick_summaries.csv";

const SNAPSHOT_HEADER: [&str; 10] = [
    "tick", "name", "kind", "x", "y", "state", "speed", "heading", "fuel", "combat_stat",
];
const SUMMARY_HEADER: [&str; 3] = ["tick", "moving_vessels", "port_fuel_total"];

/// Writes the trace to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.  `dir` is created if missing.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = open(&dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = open(&dir.join(SUMMARY_FILE))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

/// Headers are written by hand so that an empty trace still has them.
fn open(path: &Path) -> OutputResult<Writer<File>> {
    Ok(WriterBuilder::new().has_headers(false).from_path(path)?)
}

impl TraceWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[VesselSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.serialize(row)?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
