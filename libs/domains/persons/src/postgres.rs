use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{PersonError, PersonResult},
    models::Person,
    repository::PersonRepository,
};

#[derive(Clone)]
pub struct PgPersonRepository {
    db: DatabaseConnection,
}

impl PgPersonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn create(&self, person: Person) -> PersonResult<i64> {
        let now = Utc::now().fixed_offset();
        let model = entity::ActiveModel {
            first_name: Set(person.first_name),
            last_name: Set(person.last_name),
            email: Set(person.email),
            phone: Set(person.phone),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(person_id = model.id, "Created person");
        Ok(model.id)
    }

    async fn list(&self) -> PersonResult<Vec<Person>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i64) -> PersonResult<Person> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(PersonError::NotFound(id))
    }

    async fn update(&self, person: Person) -> PersonResult<()> {
        let changes = entity::ActiveModel {
            first_name: Set(person.first_name),
            last_name: Set(person.last_name),
            email: Set(person.email),
            phone: Set(person.phone),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(person.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(PersonError::NotFound(person.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> PersonResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(PersonError::NotFound(id));
        }
        tracing::info!(person_id = id, "Deleted person");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i64, first_name: &str) -> entity::Model {
        let now = Utc::now().fixed_offset();
        entity::Model {
            id,
            first_name: first_name.to_string(),
            last_name: "Pereyra".into(),
            email: None,
            phone: Some("+54 9 11 5555 0101".into()),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_get_maps_optional_columns() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(5, "Ana")]])
            .into_connection();
        let repo = PgPersonRepository::new(db);

        let person = repo.get(5).await.unwrap();
        assert_eq!(person.full_name(), "Ana Pereyra");
        assert_eq!(person.email, None);
        assert_eq!(person.phone.as_deref(), Some("+54 9 11 5555 0101"));
    }

    #[tokio::test]
    async fn test_get_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgPersonRepository::new(db);

        assert!(matches!(repo.get(6).await, Err(PersonError::NotFound(6))));
    }

    #[tokio::test]
    async fn test_delete_zero_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgPersonRepository::new(db);

        assert!(matches!(repo.delete(5).await, Err(PersonError::NotFound(5))));
    }
}
