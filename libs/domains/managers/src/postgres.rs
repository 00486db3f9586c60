use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{ManagerError, ManagerResult},
    models::Manager,
    repository::ManagerRepository,
};

#[derive(Clone)]
pub struct PgManagerRepository {
    db: DatabaseConnection,
}

impl PgManagerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ManagerRepository for PgManagerRepository {
    async fn create(&self, manager: Manager) -> ManagerResult<i64> {
        let now = Utc::now().fixed_offset();
        let model = entity::ActiveModel {
            name: Set(manager.name),
            kind: Set(manager.kind),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(manager_id = model.id, "Created manager");
        Ok(model.id)
    }

    async fn list(&self) -> ManagerResult<Vec<Manager>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i64) -> ManagerResult<Manager> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(ManagerError::NotFound(id))
    }

    async fn update(&self, manager: Manager) -> ManagerResult<()> {
        let changes = entity::ActiveModel {
            name: Set(manager.name),
            kind: Set(manager.kind),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(manager.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ManagerError::NotFound(manager.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> ManagerResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(ManagerError::NotFound(id));
        }
        tracing::info!(manager_id = id, "Deleted manager");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn model(id: i64, name: &str) -> entity::Model {
        let now = Utc::now().fixed_offset();
        entity::Model {
            id,
            name: name.to_string(),
            kind: "agronomist".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(20, "Manager A"), model(21, "Manager B")]])
            .into_connection();
        let repo = PgManagerRepository::new(db);

        let managers = repo.list().await.unwrap();
        assert_eq!(managers.len(), 2);
        assert_eq!(managers[0].id, 20);
        assert_eq!(managers[1].kind, "agronomist");
    }

    #[tokio::test]
    async fn test_update_zero_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgManagerRepository::new(db);

        let result = repo.update(model(20, "Manager A").into()).await;
        assert!(matches!(result, Err(ManagerError::NotFound(20))));
    }

    #[tokio::test]
    async fn test_delete_failure_is_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("foreign key violation".into())])
            .into_connection();
        let repo = PgManagerRepository::new(db);

        assert!(matches!(repo.delete(20).await, Err(ManagerError::Internal(_))));
    }
}
