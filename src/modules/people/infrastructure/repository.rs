/// Diesel-based implementation of PersonRepository
///
/// A batch is written inside a single transaction so a failed insert leaves
/// no partial import behind.
use crate::modules::people::domain::entities::Person;
use crate::modules::people::domain::repository::PersonRepository;
use crate::modules::people::infrastructure::models::NewPersonModel;
use crate::schema::people;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::{DbConnection, DbPool};
use crate::shared::utils::logger::TimedOperation;
use async_trait::async_trait;
use diesel::prelude::*;

// Postgres caps bind parameters per statement; 17 columns per row keeps this well under it.
const INSERT_CHUNK_SIZE: usize = 1000;

pub struct PersonRepositoryImpl {
    pool: DbPool,
}

impl PersonRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn get_conn(&self) -> AppResult<DbConnection> {
        self.pool
            .get()
            .map_err(|e| AppError::DatabaseError(format!("Failed to get connection: {}", e)))
    }
}

#[async_trait]
impl PersonRepository for PersonRepositoryImpl {
    async fn save_all(&self, people: Vec<Person>) -> AppResult<usize> {
        if people.is_empty() {
            return Ok(0);
        }

        let timer = TimedOperation::new("people.save_all");
        let rows = people
            .iter()
            .map(NewPersonModel::from_person)
            .collect::<AppResult<Vec<_>>>()?;

        let mut conn = self.get_conn()?;

        let inserted = conn
            .transaction::<usize, diesel::result::Error, _>(|conn| {
                let mut inserted = 0;
                for chunk in rows.chunks(INSERT_CHUNK_SIZE) {
                    inserted += diesel::insert_into(people::table)
                        .values(chunk)
                        .execute(conn)?;
                }
                Ok(inserted)
            })
            .map_err(|e| AppError::DatabaseError(format!("Failed to save people: {}", e)))?;

        timer.finish_with_info(&format!("{} rows", inserted));
        Ok(inserted)
    }

    async fn count(&self) -> AppResult<i64> {
        let mut conn = self.get_conn()?;

        people::table
            .count()
            .get_result(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to count people: {}", e)))
    }
}
