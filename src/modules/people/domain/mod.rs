pub mod entities;
pub mod errors;
pub mod factory;
pub mod repository;
pub mod row_fields;

pub use entities::{Person, PersonDetails, PersonType};
pub use errors::RowError;
pub use factory::{PersonFactory, PersonFactoryRegistry};
pub use repository::PersonRepository;
pub use row_fields::RowFields;
