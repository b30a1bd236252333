/// Diesel-based implementation of ImportStatusRepository
///
/// Re-recording a job ID overwrites the earlier row, so the history keeps one
/// terminal record per import.
use crate::modules::imports::domain::entities::ImportStatus;
use crate::modules::imports::domain::repository::ImportStatusRepository;
use crate::modules::imports::infrastructure::models::{ImportStatusModel, NewImportStatus};
use crate::schema::import_statuses;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::{DbConnection, DbPool};
use crate::shared::utils::logger::LogContext;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use uuid::Uuid;

pub struct ImportStatusRepositoryImpl {
    pool: DbPool,
}

impl ImportStatusRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn get_conn(&self) -> AppResult<DbConnection> {
        self.pool
            .get()
            .map_err(|e| AppError::DatabaseError(format!("Failed to get connection: {}", e)))
    }
}

#[async_trait]
impl ImportStatusRepository for ImportStatusRepositoryImpl {
    async fn add(&self, status: &ImportStatus) -> AppResult<()> {
        let start = std::time::Instant::now();
        let new_status = NewImportStatus::try_from(status)?;
        let mut conn = self.get_conn()?;

        diesel::insert_into(import_statuses::table)
            .values(&new_status)
            .on_conflict(import_statuses::id)
            .do_update()
            .set((
                import_statuses::state.eq(excluded(import_statuses::state)),
                import_statuses::end_time.eq(excluded(import_statuses::end_time)),
                import_statuses::processed_rows.eq(excluded(import_statuses::processed_rows)),
                import_statuses::error.eq(excluded(import_statuses::error)),
            ))
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to record import: {}", e)))?;

        LogContext::db_operation(
            "insert",
            "import_statuses",
            Some(start.elapsed().as_millis() as u64),
        );
        Ok(())
    }

    async fn get_by_id(&self, job_id: Uuid) -> AppResult<Option<ImportStatus>> {
        let mut conn = self.get_conn()?;

        let status: Option<ImportStatusModel> = import_statuses::table
            .find(job_id)
            .select(ImportStatusModel::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| AppError::DatabaseError(format!("Failed to get import by id: {}", e)))?;

        status.map(|s| s.to_import_status()).transpose()
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<ImportStatus>> {
        let mut conn = self.get_conn()?;

        let statuses: Vec<ImportStatusModel> = import_statuses::table
            .order(import_statuses::start_time.desc())
            .limit(limit)
            .select(ImportStatusModel::as_select())
            .load(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to list imports: {}", e)))?;

        statuses
            .into_iter()
            .map(|s| s.to_import_status())
            .collect()
    }
}
