/// People module
///
/// Turns raw import rows into typed people and stores them in bulk.
///
/// Architecture:
/// - Domain: Person entity, row dispatch (factory registry) and repository trait
/// - Infrastructure: Diesel-based repository implementation
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use domain::{
    Person, PersonDetails, PersonFactory, PersonFactoryRegistry, PersonRepository, PersonType,
    RowError, RowFields,
};
pub use infrastructure::PersonRepositoryImpl;
