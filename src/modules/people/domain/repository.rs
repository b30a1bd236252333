/// Repository trait for person persistence
///
/// Bulk imports hand their whole batch to `save_all` in one call.
use crate::modules::people::domain::entities::Person;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Persist every person or none of them; returns the number stored
    async fn save_all(&self, people: Vec<Person>) -> AppResult<usize>;

    /// Total number of stored people
    async fn count(&self) -> AppResult<i64>;
}
