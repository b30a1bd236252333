// Shared Kernel
// Cross-cutting concerns used by every bounded context

pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Database pool and migrations
pub mod utils; // Logging helpers

// Re-exports for convenience
pub use config::{AppConfig, ImportSettings};
pub use infrastructure::database::Database;
