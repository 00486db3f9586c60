use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{CropError, CropResult},
    models::Crop,
    repository::CropRepository,
};

#[derive(Clone)]
pub struct PgCropRepository {
    db: DatabaseConnection,
}

impl PgCropRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CropRepository for PgCropRepository {
    async fn create(&self, crop: Crop) -> CropResult<i64> {
        let now = Utc::now().fixed_offset();
        let model = entity::ActiveModel {
            name: Set(crop.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(crop_id = model.id, "Created crop");
        Ok(model.id)
    }

    async fn list(&self) -> CropResult<Vec<Crop>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i64) -> CropResult<Crop> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(CropError::NotFound(id))
    }

    async fn update(&self, crop: Crop) -> CropResult<()> {
        let changes = entity::ActiveModel {
            name: Set(crop.name),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(crop.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(CropError::NotFound(crop.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> CropResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(CropError::NotFound(id));
        }
        tracing::info!(crop_id = id, "Deleted crop");
        Ok(())
    }
}
