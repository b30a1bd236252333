/// Background worker for a single admitted import
///
/// Reads the upload on the blocking pool, streams the rows through the person
/// factories, publishes progress to the job registry, hands the finished batch
/// to the person repository and records the terminal status in the import
/// history. Outcomes are only observable through the registry and the history.
use super::domain::entities::ImportStatus;
use super::domain::errors::ImportError;
use super::domain::repository::ImportStatusRepository;
use super::gate::AdmissionPermit;
use super::registry::JobRegistry;
use crate::modules::people::domain::{Person, PersonFactoryRegistry, PersonRepository, RowFields};
use crate::shared::config::ImportSettings;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_debug, log_error, log_info, log_warn};
use futures::FutureExt;
use std::io::Read;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task;
use uuid::Uuid;

// Records buffered between the blocking reader and the row builder
const RECORD_BUFFER: usize = 256;

type RecordMessage = Result<csv::StringRecord, ImportError>;

pub struct ImportWorker {
    factories: Arc<PersonFactoryRegistry>,
    person_repository: Arc<dyn PersonRepository>,
    status_repository: Arc<dyn ImportStatusRepository>,
    registry: JobRegistry,
    settings: ImportSettings,
}

impl ImportWorker {
    pub fn new(
        factories: Arc<PersonFactoryRegistry>,
        person_repository: Arc<dyn PersonRepository>,
        status_repository: Arc<dyn ImportStatusRepository>,
        registry: JobRegistry,
        settings: ImportSettings,
    ) -> Self {
        Self {
            factories,
            person_repository,
            status_repository,
            registry,
            settings,
        }
    }

    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }

    /// Run the import to a terminal state, then give the admission slot back
    ///
    /// The job must already be published in the registry. A panic anywhere in
    /// the row or persistence path is turned into a FAILED status.
    pub async fn run<R>(self: Arc<Self>, job_id: Uuid, source: R, permit: AdmissionPermit)
    where
        R: Read + Send + 'static,
    {
        let timer = TimedOperation::new("import.run");

        // A panicking factory or sink must still end the job, so unwinds are
        // caught here and reported like any other failure
        let outcome = AssertUnwindSafe(self.execute(job_id, source))
            .catch_unwind()
            .await
            .unwrap_or(Err(ImportError::WorkerPanicked));

        let failure = outcome.err().map(|e| e.to_string());
        let reset_progress = self.settings.reset_progress_on_failure;

        // Step 1: publish the terminal state; no-op if the job is already terminal
        let terminal = self.registry.update(job_id, |status| {
            match &failure {
                None => status.complete(),
                Some(reason) => status.fail(reason.clone(), reset_progress),
            };
        });

        // Step 2: record history while the slot is still held, so a new import
        // cannot be admitted before this one is on record
        match terminal {
            Some(status) => {
                LogContext::import_finished(
                    job_id,
                    &status.state.to_string(),
                    status.processed_rows,
                    status.error.as_deref(),
                );
                self.record_history(&status).await;
                timer.finish_with_info(&format!("{} {}", job_id, status.state));
            }
            None => {
                log_error!("Import {} finished but was never registered", job_id);
            }
        }

        // Step 3: free the slot
        permit.release();
    }

    async fn execute<R>(&self, job_id: Uuid, source: R) -> Result<usize, ImportError>
    where
        R: Read + Send + 'static,
    {
        let people = self.read_people(job_id, source).await?;
        let batch_size = people.len();

        // All or nothing: nothing is saved unless every row was built
        let saved = self
            .person_repository
            .save_all(people)
            .await
            .map_err(|e| ImportError::Persistence(e.to_string()))?;

        log_info!(
            "Import {}: persisted {} of {} people",
            job_id,
            saved,
            batch_size
        );
        Ok(saved)
    }

    /// Build every row in file order; the first bad row aborts the whole import
    async fn read_people<R>(&self, job_id: Uuid, source: R) -> Result<Vec<Person>, ImportError>
    where
        R: Read + Send + 'static,
    {
        // Reads on the upload can block for as long as the client takes to send
        // it, so they run on the blocking pool and hand records over a channel
        let (sender, mut records) = mpsc::channel(RECORD_BUFFER);
        let reader = task::spawn_blocking(move || stream_records(job_id, source, sender));

        let mut people = Vec::new();

        while let Some(record) = records.recv().await {
            let record = record?;

            let person = {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                let fields: Vec<&str> = record.iter().collect();
                let row = RowFields::new(line, &fields);
                if row.is_empty() {
                    continue;
                }
                self.factories.create_from_row(&row)?
            };

            // Throttle before the row counts as processed
            if !self.settings.row_delay.is_zero() {
                tokio::time::sleep(self.settings.row_delay).await;
            }

            let person_type = person.person_type();
            people.push(person);

            match self.registry.update(job_id, |status| status.record_row()) {
                Some(status) => {
                    LogContext::import_progress(job_id, status.processed_rows, person_type.as_str())
                }
                None => log_warn!("Import {}: progress update for unknown job", job_id),
            }
        }

        // A closed channel only means end of stream if the reader exited cleanly
        reader.await.map_err(|e| {
            if e.is_panic() {
                ImportError::WorkerPanicked
            } else {
                ImportError::Stream(e.to_string())
            }
        })?;

        Ok(people)
    }

    async fn record_history(&self, status: &ImportStatus) {
        if let Err(e) = self.status_repository.add(status).await {
            LogContext::error_with_context(
                &e,
                &format!("Failed to record import {} in history", status.id),
            );
        }
    }
}

/// Pull raw records off the upload until end of stream or the first read error
///
/// Runs on a blocking thread. Returns early once the import stops listening.
fn stream_records<R: Read>(job_id: Uuid, source: R, records: mpsc::Sender<RecordMessage>) {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut sent = 0u64;
    for record in reader.into_records() {
        let failed = record.is_err();
        if records.blocking_send(record.map_err(ImportError::from)).is_err() {
            log_debug!(
                "Import {}: reader stopped after {} records, import aborted",
                job_id,
                sent
            );
            return;
        }
        if failed {
            return;
        }
        sent += 1;
    }

    log_debug!("Import {}: end of stream after {} records", job_id, sent);
}
