/// Test helper functions and service builders
use super::fakes::{InMemoryImportStatusRepository, InMemoryPersonRepository};
use roster_lib::assemble_import_service;
use roster_lib::modules::imports::{ImportService, ImportStatus};
use roster_lib::shared::ImportSettings;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub struct TestServices {
    pub import_service: ImportService,
    pub people: Arc<InMemoryPersonRepository>,
    pub history: Arc<InMemoryImportStatusRepository>,
}

/// Build an import service over in-memory sinks with no row delay
pub fn build_test_services() -> TestServices {
    build_test_services_with(InMemoryPersonRepository::default(), ImportSettings::default())
}

pub fn build_test_services_with(
    people: InMemoryPersonRepository,
    settings: ImportSettings,
) -> TestServices {
    build_test_services_from(people, InMemoryImportStatusRepository::default(), settings)
}

pub fn build_test_services_from(
    people: InMemoryPersonRepository,
    history: InMemoryImportStatusRepository,
    settings: ImportSettings,
) -> TestServices {
    let people = Arc::new(people);
    let history = Arc::new(history);

    let import_service = assemble_import_service(people.clone(), history.clone(), settings);

    TestServices {
        import_service,
        people,
        history,
    }
}

/// Poll until the job reaches COMPLETED or FAILED
pub async fn wait_for_terminal(service: &ImportService, job_id: Uuid) -> ImportStatus {
    wait_for_terminal_within(service, job_id, Duration::from_secs(10)).await
}

pub async fn wait_for_terminal_within(
    service: &ImportService,
    job_id: Uuid,
    limit: Duration,
) -> ImportStatus {
    tokio::time::timeout(limit, async {
        loop {
            let status = service.get_import_status(job_id).await.unwrap();
            if status.is_terminal() {
                return status;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("import did not reach a terminal state in time")
}

/// Poll until the admission gate is free again
///
/// The worker writes the terminal status before it gives the gate back, so a
/// caller can briefly observe a finished job while the gate is still held.
pub async fn wait_for_idle(service: &ImportService) {
    tokio::time::timeout(Duration::from_secs(10), async {
        while service.is_import_running() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("import gate was never released")
}
