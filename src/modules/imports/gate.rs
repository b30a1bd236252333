/// Single-flight admission for imports
///
/// The gate holds exactly one permit. Submitters never wait for it: a busy
/// gate is a rejection, not a queue.
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

#[derive(Clone, Debug)]
pub struct AdmissionGate {
    slot: Arc<Semaphore>,
}

impl AdmissionGate {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Semaphore::new(1)),
        }
    }

    /// Take the slot if it is free; never blocks
    pub fn try_acquire(&self) -> Option<AdmissionPermit> {
        self.slot
            .clone()
            .try_acquire_owned()
            .ok()
            .map(|permit| AdmissionPermit { _permit: permit })
    }

    pub fn is_available(&self) -> bool {
        self.slot.available_permits() > 0
    }
}

impl Default for AdmissionGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Proof of admission. The slot is freed when the permit is released or dropped.
#[derive(Debug)]
pub struct AdmissionPermit {
    _permit: OwnedSemaphorePermit,
}

impl AdmissionPermit {
    pub fn release(self) {
        drop(self);
    }
}
