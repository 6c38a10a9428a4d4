use sn_sim::SimError;
use sn_view::ViewError;
use thiserror::Error;

/// Why a single command line was rejected.  The session always continues.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("illegal command")]
    Illegal,

    /// Missing or malformed arguments.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        CommandError::Usage(msg.into())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
