use std::{io, path::PathBuf};

use fair_hash_core::KeyWidthError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("i/o error writing {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error(transparent)]
    KeyWidth(#[from] KeyWidthError),
    #[error("function name {name:?} is not a valid SystemVerilog identifier")]
    FunctionName { name: String },
}

impl From<KeyWidthError> for Error {
    fn from(e: KeyWidthError) -> Self {
        Error::InvalidArgument(e.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
