/// Bulk import module
///
/// Accepts a people file, admits at most one import at a time and runs it on a
/// background task while callers poll its status.
///
/// Architecture:
/// - Domain: Import status entity, errors and history repository trait
/// - Registry / Gate: live status store and single-flight admission
/// - Worker: background task that streams rows and records the outcome
/// - Coordinator: admission + job creation + task launch
/// - Infrastructure: Diesel-based history repository
pub mod application;
pub mod coordinator;
pub mod domain;
pub mod gate;
pub mod infrastructure;
pub mod registry;
pub mod worker;

// Re-exports for easy access
pub use application::ImportService;
pub use coordinator::ImportCoordinator;
pub use domain::{ImportError, ImportState, ImportStatus, ImportStatusRepository};
pub use gate::{AdmissionGate, AdmissionPermit};
pub use infrastructure::ImportStatusRepositoryImpl;
pub use registry::JobRegistry;
pub use worker::ImportWorker;
