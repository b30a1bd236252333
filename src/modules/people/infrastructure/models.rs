/// Diesel models for the people table
use crate::modules::people::domain::entities::{Person, PersonDetails};
use crate::schema::people;
use crate::shared::errors::{AppError, AppResult};
use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

/// Diesel model for inserting imported people
#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = people)]
pub struct NewPersonModel {
    pub id: Uuid,
    pub person_type: String,
    pub first_name: String,
    pub last_name: String,
    pub pesel: String,
    pub height: f64,
    pub weight: f64,
    pub email: String,
    pub university_name: Option<String>,
    pub year_of_study: Option<i32>,
    pub field_of_study: Option<String>,
    pub scholarship: Option<f64>,
    pub current_position: Option<String>,
    pub current_salary: Option<f64>,
    pub employment_start: Option<NaiveDate>,
    pub pension: Option<f64>,
    pub years_worked: Option<i32>,
}

impl NewPersonModel {
    pub fn from_person(person: &Person) -> AppResult<Self> {
        let mut model = Self {
            id: person.id,
            person_type: person.person_type().to_string(),
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            pesel: person.pesel.clone(),
            height: person.height,
            weight: person.weight,
            email: person.email.clone(),
            university_name: None,
            year_of_study: None,
            field_of_study: None,
            scholarship: None,
            current_position: None,
            current_salary: None,
            employment_start: None,
            pension: None,
            years_worked: None,
        };

        match &person.details {
            PersonDetails::Student {
                university_name,
                year_of_study,
                field_of_study,
                scholarship,
            } => {
                model.university_name = Some(university_name.clone());
                model.year_of_study = Some(to_db_int(*year_of_study, "year_of_study")?);
                model.field_of_study = Some(field_of_study.clone());
                model.scholarship = Some(*scholarship);
            }
            PersonDetails::Employee {
                current_position,
                current_salary,
                employment_start,
            } => {
                model.current_position = Some(current_position.clone());
                model.current_salary = Some(*current_salary);
                model.employment_start = Some(*employment_start);
            }
            PersonDetails::Pensioner {
                pension,
                years_worked,
            } => {
                model.pension = Some(*pension);
                model.years_worked = Some(to_db_int(*years_worked, "years_worked")?);
            }
        }

        Ok(model)
    }
}

fn to_db_int(value: u32, field: &str) -> AppResult<i32> {
    i32::try_from(value)
        .map_err(|_| AppError::InvalidInput(format!("{} out of range: {}", field, value)))
}
