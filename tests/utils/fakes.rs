/// In-memory stand-ins for the database-backed repositories
use async_trait::async_trait;
use roster_lib::modules::imports::{ImportStatus, ImportStatusRepository};
use roster_lib::modules::people::{Person, PersonRepository};
use roster_lib::shared::errors::{AppError, AppResult};
use std::io::{self, Read};
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

/// Records every batch it is handed; optionally fails every save
#[derive(Default)]
pub struct InMemoryPersonRepository {
    batches: Mutex<Vec<Vec<Person>>>,
    fail_with: Option<String>,
}

impl InMemoryPersonRepository {
    pub fn failing(message: &str) -> Self {
        Self {
            batches: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn batches(&self) -> Vec<Vec<Person>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn save_all(&self, people: Vec<Person>) -> AppResult<usize> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::DatabaseError(message.clone()));
        }
        let count = people.len();
        self.batches.lock().unwrap().push(people);
        Ok(count)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.batches.lock().unwrap().iter().map(|b| b.len() as i64).sum())
    }
}

#[derive(Default)]
pub struct InMemoryImportStatusRepository {
    records: Mutex<Vec<ImportStatus>>,
}

impl InMemoryImportStatusRepository {
    pub fn with_records(records: Vec<ImportStatus>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn records(&self) -> Vec<ImportStatus> {
        self.records.lock().unwrap().clone()
    }

    pub fn records_for(&self, job_id: Uuid) -> Vec<ImportStatus> {
        self.records()
            .into_iter()
            .filter(|status| status.id == job_id)
            .collect()
    }
}

#[async_trait]
impl ImportStatusRepository for InMemoryImportStatusRepository {
    async fn add(&self, status: &ImportStatus) -> AppResult<()> {
        self.records.lock().unwrap().push(status.clone());
        Ok(())
    }

    async fn get_by_id(&self, job_id: Uuid) -> AppResult<Option<ImportStatus>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|status| status.id == job_id)
            .cloned())
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<ImportStatus>> {
        let mut records = self.records();
        records.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        records.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(records)
    }
}

/// Yields `data`, then fails like a dropped upload
pub struct TruncatedReader {
    data: io::Cursor<Vec<u8>>,
}

impl TruncatedReader {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data: io::Cursor::new(data),
        }
    }
}

impl Read for TruncatedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "upload connection reset",
            )),
            n => Ok(n),
        }
    }
}

/// Stalls once before handing over `data`, like an upload still in flight
pub struct SlowReader {
    data: io::Cursor<Vec<u8>>,
    stall: Option<Duration>,
}

impl SlowReader {
    pub fn new(data: Vec<u8>, stall: Duration) -> Self {
        Self {
            data: io::Cursor::new(data),
            stall: Some(stall),
        }
    }
}

impl Read for SlowReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(stall) = self.stall.take() {
            std::thread::sleep(stall);
        }
        self.data.read(buf)
    }
}
