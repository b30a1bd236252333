use super::entities::{Person, PersonDetails, PersonType};
use super::errors::RowError;
use super::row_fields::RowFields;
use uuid::Uuid;

/// Factory trait for building a person from one import row
pub trait PersonFactory: Send + Sync {
    /// Build a person from the row; field 0 is the type tag and is not re-checked
    fn create_from_row(&self, row: &RowFields<'_>) -> Result<Person, RowError>;

    /// Get the person type this factory creates
    fn person_type(&self) -> PersonType;

    /// Check if this factory handles the given row tag
    fn supports(&self, tag: &str) -> bool {
        self.person_type().matches(tag)
    }
}

// Common layout: tag, first_name, last_name, pesel, height, weight, email
const FIRST_DETAIL: usize = 7;

fn build_person(row: &RowFields<'_>, details: PersonDetails) -> Result<Person, RowError> {
    Ok(Person {
        id: Uuid::new_v4(),
        first_name: row.text(1, "first_name")?,
        last_name: row.text(2, "last_name")?,
        pesel: row.text(3, "pesel")?,
        height: row.parse(4, "height")?,
        weight: row.parse(5, "weight")?,
        email: row.text(6, "email")?,
        details,
    })
}

/// Factory for student rows
pub struct StudentFactory;

impl PersonFactory for StudentFactory {
    fn create_from_row(&self, row: &RowFields<'_>) -> Result<Person, RowError> {
        let details = PersonDetails::Student {
            university_name: row.text(FIRST_DETAIL, "university_name")?,
            year_of_study: row.parse(FIRST_DETAIL + 1, "year_of_study")?,
            field_of_study: row.text(FIRST_DETAIL + 2, "field_of_study")?,
            scholarship: row.parse(FIRST_DETAIL + 3, "scholarship")?,
        };
        build_person(row, details)
    }

    fn person_type(&self) -> PersonType {
        PersonType::Student
    }
}

/// Factory for employee rows
pub struct EmployeeFactory;

impl PersonFactory for EmployeeFactory {
    fn create_from_row(&self, row: &RowFields<'_>) -> Result<Person, RowError> {
        let details = PersonDetails::Employee {
            current_position: row.text(FIRST_DETAIL, "current_position")?,
            current_salary: row.parse(FIRST_DETAIL + 1, "current_salary")?,
            employment_start: row.date(FIRST_DETAIL + 2, "employment_start")?,
        };
        build_person(row, details)
    }

    fn person_type(&self) -> PersonType {
        PersonType::Employee
    }
}

/// Factory for pensioner rows
pub struct PensionerFactory;

impl PersonFactory for PensionerFactory {
    fn create_from_row(&self, row: &RowFields<'_>) -> Result<Person, RowError> {
        let details = PersonDetails::Pensioner {
            pension: row.parse(FIRST_DETAIL, "pension")?,
            years_worked: row.parse(FIRST_DETAIL + 1, "years_worked")?,
        };
        build_person(row, details)
    }

    fn person_type(&self) -> PersonType {
        PersonType::Pensioner
    }
}

/// Resolves a row's type tag to the factory that builds it
///
/// Factories are checked in registration order, so a later registration
/// for an already-covered tag never shadows an earlier one.
pub struct PersonFactoryRegistry {
    factories: Vec<Box<dyn PersonFactory>>,
}

impl PersonFactoryRegistry {
    /// Create a registry with the built-in factories
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(Box::new(StudentFactory));
        registry.register(Box::new(EmployeeFactory));
        registry.register(Box::new(PensionerFactory));

        registry
    }

    pub fn empty() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    pub fn register(&mut self, factory: Box<dyn PersonFactory>) {
        self.factories.push(factory);
    }

    /// Find the factory for a row tag
    pub fn resolve(&self, tag: &str) -> Result<&dyn PersonFactory, RowError> {
        self.factories
            .iter()
            .find(|factory| factory.supports(tag))
            .map(|factory| factory.as_ref())
            .ok_or_else(|| RowError::UnknownPersonType(tag.trim().to_string()))
    }

    /// Resolve the row's tag and build the person in one step
    pub fn create_from_row(&self, row: &RowFields<'_>) -> Result<Person, RowError> {
        self.resolve(row.type_tag())?.create_from_row(row)
    }

    pub fn supported_types(&self) -> Vec<PersonType> {
        self.factories.iter().map(|f| f.person_type()).collect()
    }
}

impl Default for PersonFactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
