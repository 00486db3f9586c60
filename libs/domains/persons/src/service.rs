use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{PersonError, PersonResult};
use crate::models::{Person, UpdatePerson};
use crate::repository::PersonRepository;

/// Service layer for Person operations
pub struct PersonService<R: PersonRepository> {
    repository: Arc<R>,
}

impl<R: PersonRepository> Clone for PersonService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: PersonRepository> PersonService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, person), fields(person_name = %person.full_name()))]
    pub async fn create_person(&self, person: Person) -> PersonResult<i64> {
        person
            .validate()
            .map_err(|e| PersonError::Validation(e.to_string()))?;

        self.repository.create(person).await
    }

    #[instrument(skip(self))]
    pub async fn list_persons(&self) -> PersonResult<Vec<Person>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_person(&self, id: i64) -> PersonResult<Person> {
        self.repository.get(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_person(&self, id: i64, input: UpdatePerson) -> PersonResult<()> {
        input
            .validate()
            .map_err(|e| PersonError::Validation(e.to_string()))?;

        let mut person = self.repository.get(id).await?;
        person.apply_update(input);
        self.repository.update(person).await
    }

    #[instrument(skip(self))]
    pub async fn delete_person(&self, id: i64) -> PersonResult<()> {
        self.repository.delete(id).await
    }
}
