//! `sn-output` — per-tick trace files for the simnautica world.
//!
//! | Backend   | Files created                                    |
//! |-----------|--------------------------------------------------|
//! | CSV       | `vessel_snapshots.csv`, `tick_summaries.csv`     |
//!
//! Backends implement [`TraceWriter`] and are driven by [`TraceObserver`],
//! which implements `sn_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sn_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer);
//! world.run_ticks(24, &mut obs);
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{TickSummaryRow, VesselSnapshotRow};
pub use writer::TraceWriter;
