use thiserror::Error;

/// Failure to turn one raw row into a person
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("unknown person type '{0}'")]
    UnknownPersonType(String),

    #[error("malformed row {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}

impl RowError {
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        RowError::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}
