pub mod modules;
mod schema;
pub mod shared;

use modules::{
    imports::{
        AdmissionGate, ImportCoordinator, ImportService, ImportStatusRepository,
        ImportStatusRepositoryImpl, ImportWorker, JobRegistry,
    },
    people::{PersonFactoryRegistry, PersonRepository, PersonRepositoryImpl},
};
use shared::errors::AppResult;
use shared::{AppConfig, Database, ImportSettings};
use std::sync::Arc;

/// Wire the import pipeline against a live Postgres database
///
/// Connects, applies pending migrations and returns a ready `ImportService`.
pub fn build_import_service(config: &AppConfig) -> AppResult<ImportService> {
    shared::utils::init_logger();

    let database = Database::connect(config.require_database_url()?)?;
    database.run_migrations()?;

    let person_repo: Arc<dyn PersonRepository> =
        Arc::new(PersonRepositoryImpl::new(database.pool().clone()));
    let status_repo: Arc<dyn ImportStatusRepository> =
        Arc::new(ImportStatusRepositoryImpl::new(database.pool().clone()));

    log::info!(
        "Import pipeline ready (row delay: {:?}, reset progress on failure: {})",
        config.import.row_delay,
        config.import.reset_progress_on_failure
    );

    Ok(assemble_import_service(
        person_repo,
        status_repo,
        config.import.clone(),
    ))
}

/// Wire the import pipeline on top of any pair of sinks
///
/// Each call gets its own gate and registry, so independent services never
/// block each other.
pub fn assemble_import_service(
    person_repo: Arc<dyn PersonRepository>,
    status_repo: Arc<dyn ImportStatusRepository>,
    settings: ImportSettings,
) -> ImportService {
    let worker = Arc::new(ImportWorker::new(
        Arc::new(PersonFactoryRegistry::new()),
        person_repo,
        Arc::clone(&status_repo),
        JobRegistry::new(),
        settings,
    ));
    let coordinator = ImportCoordinator::new(AdmissionGate::new(), worker);

    ImportService::new(coordinator, status_repo)
}
