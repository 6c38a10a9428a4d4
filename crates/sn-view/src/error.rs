use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("New map size is too small.")]
    SizeTooSmall,

    #[error("New map size is too big.")]
    SizeTooBig,

    #[error("New map scale must be positive.")]
    NonPositiveScale,
}

pub type ViewResult<T> = Result<T, ViewError>;
