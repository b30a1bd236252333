/// In-memory registry of live import statuses
///
/// Every mutation runs under the entry's shard lock, so readers only ever see
/// whole snapshots. Entries are never removed.
use super::domain::entities::ImportStatus;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct JobRegistry {
    jobs: Arc<DashMap<Uuid, ImportStatus>>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a status, replacing any previous entry for the same job
    pub fn put(&self, status: ImportStatus) {
        self.jobs.insert(status.id, status);
    }

    /// Snapshot of a job's current status
    pub fn get(&self, job_id: Uuid) -> Option<ImportStatus> {
        self.jobs.get(&job_id).map(|entry| entry.value().clone())
    }

    /// Apply `f` atomically and return the updated snapshot
    pub fn update<F>(&self, job_id: Uuid, f: F) -> Option<ImportStatus>
    where
        F: FnOnce(&mut ImportStatus),
    {
        self.jobs.get_mut(&job_id).map(|mut entry| {
            f(entry.value_mut());
            entry.value().clone()
        })
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::imports::domain::entities::ImportState;

    #[test]
    fn put_then_get_returns_snapshot() {
        let registry = JobRegistry::new();
        let status = ImportStatus::started(Uuid::new_v4());
        registry.put(status.clone());

        assert_eq!(registry.get(status.id), Some(status));
        assert_eq!(registry.len(), 1);
        assert!(registry.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn update_is_visible_to_clones() {
        let registry = JobRegistry::new();
        let reader = registry.clone();
        let id = Uuid::new_v4();
        registry.put(ImportStatus::started(id));

        let updated = registry.update(id, |status| status.record_row()).unwrap();

        assert_eq!(updated.processed_rows, 1);
        assert_eq!(reader.get(id).unwrap().processed_rows, 1);
    }

    #[test]
    fn update_of_unknown_job_is_none() {
        let registry = JobRegistry::new();
        assert!(registry.update(Uuid::new_v4(), |s| s.record_row()).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn snapshots_are_detached() {
        let registry = JobRegistry::new();
        let id = Uuid::new_v4();
        registry.put(ImportStatus::started(id));

        let before = registry.get(id).unwrap();
        registry.update(id, |status| {
            status.complete();
        });

        assert_eq!(before.state, ImportState::Running);
        assert_eq!(registry.get(id).unwrap().state, ImportState::Completed);
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let registry = JobRegistry::new();
        let id = Uuid::new_v4();
        registry.put(ImportStatus::started(id));

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let registry = registry.clone();
                scope.spawn(move || {
                    for _ in 0..250 {
                        registry.update(id, |status| status.record_row());
                    }
                });
            }
        });

        assert_eq!(registry.get(id).unwrap().processed_rows, 1000);
    }
}
