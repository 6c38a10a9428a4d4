use sn_core::CoreError;
use sn_fleet::FleetError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("name '{0}' already exists")]
    NameConflict(String),

    /// No entity of the requested kind exists under `name`.  `kind` is the
    /// shape that was asked for ("port", "vessel", "freighter", ...).
    #[error("no {kind} named '{name}'")]
    NotFound { kind: &'static str, name: String },

    #[error("invalid speed {speed} for '{name}' (must be above 0 and at most {max})")]
    InvalidSpeed { name: String, speed: f64, max: f64 },

    #[error("'{0}' is not docked")]
    NotDocked(String),

    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
