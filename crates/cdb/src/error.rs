use thiserror::Error;

use crate::Rptr;

pub type DataFileResult<T> = Result<T, DataFileError>;

#[derive(Debug, Error)]
pub enum DataFileError {
    #[error("record {0} does not exist")]
    NotFound(Rptr),

    #[error("record {0} has been deleted")]
    Deleted(Rptr),

    #[error("record length mismatch: {0}")]
    RecordLength(String),

    #[error("invalid data file header: {0}")]
    InvalidHeader(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
