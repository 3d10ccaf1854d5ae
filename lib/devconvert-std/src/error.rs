use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DevconvertStdError {
    /// Error that may occur while I/O operations.
    #[error("IO error: `{0}`")]
    IoError(#[from] std::io::Error),

    #[error("path {0} has no parent directory")]
    MissingParent(PathBuf),

    /// Error that may occur when a temporary file can not be moved over its destination.
    #[error("failed to persist {path}: `{source}`")]
    PersistError {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

pub type DevconvertStdResult<T> = Result<T, DevconvertStdError>;
