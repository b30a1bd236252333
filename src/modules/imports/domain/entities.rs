/// Domain entities for bulk imports
///
/// An import status is created when a submission is admitted and is mutated
/// only by the worker that owns the job.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportState {
    Pending,
    Running,
    Completed,
    Failed,
}

impl ImportState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ImportState::Completed | ImportState::Failed)
    }
}

impl std::fmt::Display for ImportState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportState::Pending => write!(f, "pending"),
            ImportState::Running => write!(f, "running"),
            ImportState::Completed => write!(f, "completed"),
            ImportState::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for ImportState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ImportState::Pending),
            "running" => Ok(ImportState::Running),
            "completed" => Ok(ImportState::Completed),
            "failed" => Ok(ImportState::Failed),
            _ => Err(format!("Invalid import state: {}", s)),
        }
    }
}

/// Snapshot of one import job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatus {
    pub id: Uuid,
    pub state: ImportState,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub processed_rows: u64,
    pub error: Option<String>,
}

impl ImportStatus {
    /// Status of a freshly admitted import
    pub fn started(id: Uuid) -> Self {
        Self {
            id,
            state: ImportState::Running,
            start_time: Utc::now(),
            end_time: None,
            processed_rows: 0,
            error: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Count one successfully built row
    pub fn record_row(&mut self) {
        if !self.is_terminal() {
            self.processed_rows += 1;
        }
    }

    /// Move to COMPLETED; returns false if the job had already finished
    pub fn complete(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.state = ImportState::Completed;
        self.end_time = Some(Utc::now());
        true
    }

    /// Move to FAILED; returns false if the job had already finished
    pub fn fail(&mut self, reason: impl Into<String>, reset_progress: bool) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.state = ImportState::Failed;
        self.end_time = Some(Utc::now());
        self.error = Some(reason.into());
        if reset_progress {
            self.processed_rows = 0;
        }
        true
    }
}
