use thiserror::Error;

use crate::dims::Dims;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid grid dimensions {0:?}; both must be at least 1")]
    InvalidDimensions(Dims),
    #[error("cell position {0:?} is outside the grid")]
    OutOfBounds(Dims),
}

pub type Result<T> = std::result::Result<T, Error>;
