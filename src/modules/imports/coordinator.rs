use super::domain::entities::ImportStatus;
use super::domain::errors::ImportError;
use super::gate::AdmissionGate;
use super::registry::JobRegistry;
use super::worker::ImportWorker;
use crate::shared::utils::logger::LogContext;
use std::io::Read;
use std::sync::Arc;
use uuid::Uuid;

/// Entry point for bulk imports
///
/// Admits at most one import per gate, publishes its status before returning
/// the job ID, and leaves the rest to a detached worker task.
#[derive(Clone)]
pub struct ImportCoordinator {
    gate: AdmissionGate,
    registry: JobRegistry,
    worker: Arc<ImportWorker>,
}

impl ImportCoordinator {
    /// The coordinator publishes into the worker's registry
    pub fn new(gate: AdmissionGate, worker: Arc<ImportWorker>) -> Self {
        Self {
            gate,
            registry: worker.registry().clone(),
            worker,
        }
    }

    /// Admit an import and start it in the background
    ///
    /// Must be called from within a Tokio runtime. Fails immediately with
    /// `ImportError::AlreadyInProgress` while another import holds the gate.
    pub fn submit<R>(&self, source: R) -> Result<Uuid, ImportError>
    where
        R: Read + Send + 'static,
    {
        // Busy gate means rejection, never a wait
        let permit = self
            .gate
            .try_acquire()
            .ok_or(ImportError::AlreadyInProgress)?;

        // Publish RUNNING before the caller gets the ID back
        let job_id = Uuid::new_v4();
        self.registry.put(ImportStatus::started(job_id));
        LogContext::import_started(job_id);

        // The permit moves into the task; the worker owns the slot from here on
        let worker = Arc::clone(&self.worker);
        tokio::spawn(worker.run(job_id, source, permit));

        Ok(job_id)
    }

    /// Current snapshot of a tracked import
    pub fn status(&self, job_id: Uuid) -> Option<ImportStatus> {
        self.registry.get(job_id)
    }

    /// Whether a submission would be admitted right now
    pub fn is_idle(&self) -> bool {
        self.gate.is_available()
    }

    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }
}
