use crate::modules::imports::coordinator::ImportCoordinator;
use crate::modules::imports::domain::entities::ImportStatus;
use crate::modules::imports::domain::repository::ImportStatusRepository;
use crate::shared::errors::{AppError, AppResult};
use std::io::Read;
use std::sync::Arc;
use uuid::Uuid;

/// Import service - single facade for submitting imports and reading their status
///
/// Live jobs are answered from the in-memory registry; anything the registry
/// no longer knows (for example after a restart) falls back to the history.
#[derive(Clone)]
pub struct ImportService {
    coordinator: ImportCoordinator,
    status_repository: Arc<dyn ImportStatusRepository>,
}

impl ImportService {
    pub fn new(
        coordinator: ImportCoordinator,
        status_repository: Arc<dyn ImportStatusRepository>,
    ) -> Self {
        Self {
            coordinator,
            status_repository,
        }
    }

    /// Start a background import; returns the job ID without waiting for it
    pub fn initiate_import<R>(&self, source: R) -> AppResult<Uuid>
    where
        R: Read + Send + 'static,
    {
        Ok(self.coordinator.submit(source)?)
    }

    pub async fn get_import_status(&self, job_id: Uuid) -> AppResult<ImportStatus> {
        if let Some(status) = self.coordinator.status(job_id) {
            return Ok(status);
        }

        self.status_repository
            .get_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Import {} not found", job_id)))
    }

    pub async fn recent_imports(&self, limit: i64) -> AppResult<Vec<ImportStatus>> {
        self.status_repository.find_recent(limit).await
    }

    pub fn is_import_running(&self) -> bool {
        !self.coordinator.is_idle()
    }
}
