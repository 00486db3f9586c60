use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{FieldError, FieldResult},
    models::Field,
    repository::FieldRepository,
};

#[derive(Clone)]
pub struct PgFieldRepository {
    db: DatabaseConnection,
}

impl PgFieldRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FieldRepository for PgFieldRepository {
    async fn create(&self, field: Field) -> FieldResult<i64> {
        let now = Utc::now().fixed_offset();
        let model = entity::ActiveModel {
            name: Set(field.name),
            lease_type_id: Set(field.lease_type_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(field_id = model.id, "Created field");
        Ok(model.id)
    }

    async fn list(&self) -> FieldResult<Vec<Field>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i64) -> FieldResult<Field> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(FieldError::NotFound(id))
    }

    async fn update(&self, field: Field) -> FieldResult<()> {
        let changes = entity::ActiveModel {
            name: Set(field.name),
            lease_type_id: Set(field.lease_type_id),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(field.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(FieldError::NotFound(field.id));
        }
        Ok(())
    }

    /// Lots of the field go with it (`ON DELETE CASCADE` on `lots.field_id`).
    async fn delete(&self, id: i64) -> FieldResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(FieldError::NotFound(id));
        }
        tracing::info!(field_id = id, "Deleted field");
        Ok(())
    }
}
