use crate::modules::people::domain::errors::RowError;
use thiserror::Error;

/// Errors raised while admitting or running an import
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("import already in progress")]
    AlreadyInProgress,

    #[error(transparent)]
    Row(#[from] RowError),

    #[error("failed to read import stream: {0}")]
    Stream(String),

    #[error("failed to persist imported people: {0}")]
    Persistence(String),

    #[error("import worker panicked")]
    WorkerPanicked,
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::Stream(err.to_string())
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::Stream(err.to_string())
    }
}
