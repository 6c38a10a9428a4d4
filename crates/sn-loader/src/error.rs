use std::path::PathBuf;

use sn_sim::SimError;
use thiserror::Error;

/// Failure while reading or registering the port file.  Every per-line
/// variant carries the 1-based line number.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open port file '{}': {source}", path.display())]
    Open {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: port name too long: {name} (max {max} characters)")]
    NameTooLong { line: usize, name: String, max: usize },

    #[error("line {line}: expected coordinates after port name")]
    MissingCoordinates { line: usize },

    #[error("line {line}: invalid coordinates {text:?}")]
    BadCoordinates { line: usize, text: String },

    #[error("line {line}: expected initialFuel and fuelRate")]
    MissingFuel { line: usize },

    #[error("line {line}: invalid number {text:?}")]
    BadNumber { line: usize, text: String },

    #[error("line {line}: fuel values must be non-negative")]
    NegativeFuel { line: usize },

    #[error("line {line}: {source}")]
    Register { line: usize, source: SimError },
}

pub type LoadResult<T> = Result<T, LoadError>;
