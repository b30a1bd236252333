/// Diesel models for import_statuses table
use crate::modules::imports::domain::entities::ImportStatus;
use crate::modules::imports::domain::value_objects::ImportStateDb;
use crate::schema::import_statuses;
use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Diesel model for recording a finished import
#[derive(Insertable, Debug)]
#[diesel(table_name = import_statuses)]
pub struct NewImportStatus {
    pub id: Uuid,
    pub state: ImportStateDb,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub processed_rows: i64,
    pub error: Option<String>,
}

impl TryFrom<&ImportStatus> for NewImportStatus {
    type Error = AppError;

    fn try_from(status: &ImportStatus) -> AppResult<Self> {
        let processed_rows = i64::try_from(status.processed_rows).map_err(|_| {
            AppError::InvalidInput(format!(
                "processed_rows out of range: {}",
                status.processed_rows
            ))
        })?;

        Ok(Self {
            id: status.id,
            state: status.state.into(),
            start_time: status.start_time,
            end_time: status.end_time,
            processed_rows,
            error: status.error.clone(),
        })
    }
}

/// Diesel model for querying recorded imports
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = import_statuses)]
pub struct ImportStatusModel {
    pub id: Uuid,
    pub state: ImportStateDb,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub processed_rows: i64,
    pub error: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl ImportStatusModel {
    /// Convert to domain ImportStatus
    pub fn to_import_status(self) -> AppResult<ImportStatus> {
        let processed_rows = u64::try_from(self.processed_rows).map_err(|_| {
            AppError::InvalidInput(format!(
                "import {} has negative processed_rows: {}",
                self.id, self.processed_rows
            ))
        })?;

        Ok(ImportStatus {
            id: self.id,
            state: self.state.into(),
            start_time: self.start_time,
            end_time: self.end_time,
            processed_rows,
            error: self.error,
        })
    }
}
