/// Repository trait for the import status history
///
/// Receives one record per finished import. Implementation uses Diesel ORM
/// with PostgreSQL.
use crate::modules::imports::domain::entities::ImportStatus;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImportStatusRepository: Send + Sync {
    /// Append a terminal status
    async fn add(&self, status: &ImportStatus) -> AppResult<()>;

    /// Get a recorded status by job ID
    async fn get_by_id(&self, job_id: Uuid) -> AppResult<Option<ImportStatus>>;

    /// Most recent statuses first
    async fn find_recent(&self, limit: i64) -> AppResult<Vec<ImportStatus>>;
}
