pub mod entities;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use entities::{ImportState, ImportStatus};
pub use errors::ImportError;
pub use repository::ImportStatusRepository;
pub use value_objects::ImportStateDb;
