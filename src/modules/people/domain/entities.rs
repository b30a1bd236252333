/// Domain entities for people built from bulk import rows
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Person kind, also used as the row type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonType {
    Student,
    Employee,
    Pensioner,
}

impl PersonType {
    pub const ALL: [PersonType; 3] = [
        PersonType::Student,
        PersonType::Employee,
        PersonType::Pensioner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonType::Student => "student",
            PersonType::Employee => "employee",
            PersonType::Pensioner => "pensioner",
        }
    }

    /// Case-insensitive match against a raw row tag
    pub fn matches(&self, tag: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(tag.trim())
    }
}

impl std::fmt::Display for PersonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PersonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonType::ALL
            .into_iter()
            .find(|kind| kind.matches(s))
            .ok_or_else(|| format!("Invalid person type: {}", s))
    }
}

/// Fields that only exist for one kind of person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PersonDetails {
    Student {
        university_name: String,
        year_of_study: u32,
        field_of_study: String,
        scholarship: f64,
    },
    Employee {
        current_position: String,
        current_salary: f64,
        employment_start: NaiveDate,
    },
    Pensioner {
        pension: f64,
        years_worked: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub pesel: String,
    pub height: f64,
    pub weight: f64,
    pub email: String,
    pub details: PersonDetails,
}

impl Person {
    pub fn person_type(&self) -> PersonType {
        match self.details {
            PersonDetails::Student { .. } => PersonType::Student,
            PersonDetails::Employee { .. } => PersonType::Employee,
            PersonDetails::Pensioner { .. } => PersonType::Pensioner,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
