use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{PersonError, PersonResult};
use crate::models::Person;

/// Repository trait for Person persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn create(&self, person: Person) -> PersonResult<i64>;

    async fn list(&self) -> PersonResult<Vec<Person>>;

    async fn get(&self, id: i64) -> PersonResult<Person>;

    async fn update(&self, person: Person) -> PersonResult<()>;

    async fn delete(&self, id: i64) -> PersonResult<()>;
}

/// In-memory implementation of PersonRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryPersonRepository {
    persons: Arc<RwLock<Vec<Person>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self {
            persons: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn create(&self, mut person: Person) -> PersonResult<i64> {
        let mut persons = self.persons.write().await;
        person.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = person.id;
        persons.push(person);

        tracing::info!(person_id = id, "Created person");
        Ok(id)
    }

    async fn list(&self) -> PersonResult<Vec<Person>> {
        Ok(self.persons.read().await.clone())
    }

    async fn get(&self, id: i64) -> PersonResult<Person> {
        self.persons
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PersonError::NotFound(id))
    }

    async fn update(&self, person: Person) -> PersonResult<()> {
        let mut persons = self.persons.write().await;
        let slot = persons
            .iter_mut()
            .find(|p| p.id == person.id)
            .ok_or(PersonError::NotFound(person.id))?;
        *slot = person;
        Ok(())
    }

    async fn delete(&self, id: i64) -> PersonResult<()> {
        let mut persons = self.persons.write().await;
        let before = persons.len();
        persons.retain(|p| p.id != id);

        if persons.len() == before {
            return Err(PersonError::NotFound(id));
        }
        tracing::info!(person_id = id, "Deleted person");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_assigned_in_order() {
        let repo = InMemoryPersonRepository::new();
        let first = repo.create(Person::default()).await.unwrap();
        let second = repo.create(Person::default()).await.unwrap();

        assert_eq!((first, second), (1, 2));
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_unknown_person_is_not_found() {
        let repo = InMemoryPersonRepository::new();
        let result = repo
            .update(Person {
                id: 9,
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(PersonError::NotFound(9))));
    }
}
