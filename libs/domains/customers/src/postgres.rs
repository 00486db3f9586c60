use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use crate::{
    entity,
    error::{CustomerError, CustomerResult},
    models::Customer,
    repository::CustomerRepository,
};

#[derive(Clone)]
pub struct PgCustomerRepository {
    db: DatabaseConnection,
}

impl PgCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, customer: Customer) -> CustomerResult<i64> {
        let now = Utc::now().fixed_offset();
        let model = entity::ActiveModel {
            name: Set(customer.name),
            kind: Set(customer.kind),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(customer_id = model.id, "Created customer");
        Ok(model.id)
    }

    async fn list(&self) -> CustomerResult<Vec<Customer>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i64) -> CustomerResult<Customer> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(CustomerError::NotFound(id))
    }

    async fn update(&self, customer: Customer) -> CustomerResult<()> {
        let changes = entity::ActiveModel {
            name: Set(customer.name),
            kind: Set(customer.kind),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(customer.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(CustomerError::NotFound(customer.id));
        }
        Ok(())
    }

    /// `projects.customer_id` is `ON DELETE RESTRICT`; a customer with projects is
    /// reported as [`CustomerError::InUse`].
    async fn delete(&self, id: i64) -> CustomerResult<()> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|err| delete_error(id, err))?;

        if result.rows_affected == 0 {
            return Err(CustomerError::NotFound(id));
        }
        tracing::info!(customer_id = id, "Deleted customer");
        Ok(())
    }
}

fn delete_error(id: i64, err: DbErr) -> CustomerError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => CustomerError::InUse(id),
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_get_maps_type_column() {
        let now = Utc::now().fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![entity::Model {
                id: 10,
                name: "Client A".into(),
                kind: "company".into(),
                created_at: now,
                updated_at: now,
            }]])
            .into_connection();
        let repo = PgCustomerRepository::new(db);

        let customer = repo.get(10).await.unwrap();
        assert_eq!(customer.kind, "company");
    }

    #[tokio::test]
    async fn test_delete_zero_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgCustomerRepository::new(db);

        assert!(matches!(repo.delete(10).await, Err(CustomerError::NotFound(10))));
    }

    #[tokio::test]
    async fn test_other_delete_failures_stay_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let repo = PgCustomerRepository::new(db);

        assert!(matches!(repo.delete(10).await, Err(CustomerError::Internal(_))));
    }

    #[tokio::test]
    async fn test_insert_failure_is_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("unique violation".into())])
            .into_connection();
        let repo = PgCustomerRepository::new(db);

        let result = repo.create(Customer::default()).await;
        assert!(matches!(result, Err(CustomerError::Internal(_))));
    }
}
