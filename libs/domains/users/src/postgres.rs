use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::User,
    repository::UserRepository,
};

#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> UserResult<i64> {
        let now = Utc::now().fixed_offset();
        let model = entity::ActiveModel {
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            person_id: Set(user.person_id),
            active: Set(user.active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|err| write_error(&user, err))?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.id)
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i64) -> UserResult<User> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(UserError::NotFound(id))
    }

    async fn update(&self, user: User) -> UserResult<()> {
        let changes = entity::ActiveModel {
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            person_id: Set(user.person_id),
            active: Set(user.active),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(user.id))
            .exec(&self.db)
            .await
            .map_err(|err| write_error(&user, err))?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound(user.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound(id));
        }
        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}

fn write_error(user: &User, err: DbErr) -> UserError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            UserError::UsernameTaken(user.username.clone())
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => UserError::Validation(format!(
            "person {} does not exist",
            user.person_id.unwrap_or_default()
        )),
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i64, username: &str) -> entity::Model {
        let now = Utc::now().fixed_offset();
        entity::Model {
            id,
            username: username.to_string(),
            email: format!("{username}@campo.example"),
            person_id: Some(5),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_returns_inserted_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "apereyra")]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let id = repo.create(model(0, "apereyra").into()).await.unwrap();
        assert_eq!(id, 3);
    }

    #[tokio::test]
    async fn test_list_maps_person_link() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "apereyra"), model(4, "jgomez")]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].username, "jgomez");
        assert_eq!(users[0].person_id, Some(5));
    }

    #[tokio::test]
    async fn test_update_zero_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let result = repo.update(model(8, "apereyra").into()).await;
        assert!(matches!(result, Err(UserError::NotFound(8))));
    }

    #[tokio::test]
    async fn test_other_write_failures_stay_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let result = repo.update(model(3, "apereyra").into()).await;
        assert!(matches!(result, Err(UserError::Internal(_))));
    }
}
