use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{LotError, LotResult},
    models::Lot,
    repository::LotRepository,
};

#[derive(Clone)]
pub struct PgLotRepository {
    db: DatabaseConnection,
}

impl PgLotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LotRepository for PgLotRepository {
    async fn create(&self, lot: Lot) -> LotResult<i64> {
        let now = Utc::now().fixed_offset();
        let model = entity::ActiveModel {
            name: Set(lot.name),
            hectares: Set(lot.hectares),
            season: Set(lot.season),
            field_id: Set(lot.field_id),
            previous_crop_id: Set(lot.previous_crop_id),
            current_crop_id: Set(lot.current_crop_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(lot_id = model.id, field_id = model.field_id, "Created lot");
        Ok(model.id)
    }

    async fn list(&self) -> LotResult<Vec<Lot>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i64) -> LotResult<Lot> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(LotError::NotFound(id))
    }

    async fn update(&self, lot: Lot) -> LotResult<()> {
        let changes = entity::ActiveModel {
            name: Set(lot.name),
            hectares: Set(lot.hectares),
            season: Set(lot.season),
            field_id: Set(lot.field_id),
            previous_crop_id: Set(lot.previous_crop_id),
            current_crop_id: Set(lot.current_crop_id),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(lot.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(LotError::NotFound(lot.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> LotResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(LotError::NotFound(id));
        }
        tracing::info!(lot_id = id, "Deleted lot");
        Ok(())
    }

    async fn delete_by_field(&self, field_id: i64) -> LotResult<u64> {
        let result = entity::Entity::delete_many()
            .filter(entity::Column::FieldId.eq(field_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
