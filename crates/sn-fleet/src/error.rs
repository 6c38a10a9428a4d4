use thiserror::Error;

use crate::VesselClass;

#[derive(Debug, Error, PartialEq)]
pub enum FleetError {
    #[error("{name} is not a {expected}")]
    WrongKind {
        name:     String,
        expected: VesselClass,
    },

    #[error("{attacker} cannot attack {target}: cruisers do not attack each other")]
    InvalidTarget {
        attacker: String,
        target:   String,
    },
}

pub type FleetResult<T> = Result<T, FleetError>;
