use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{InvestorError, InvestorResult},
    models::Investor,
    repository::InvestorRepository,
};

#[derive(Clone)]
pub struct PgInvestorRepository {
    db: DatabaseConnection,
}

impl PgInvestorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InvestorRepository for PgInvestorRepository {
    async fn create(&self, investor: Investor) -> InvestorResult<i64> {
        let now = Utc::now().fixed_offset();
        let model = entity::ActiveModel {
            name: Set(investor.name),
            contributions: Set(investor.contributions),
            contribution_date: Set(investor.contribution_date),
            percentage: Set(investor.percentage),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(investor_id = model.id, "Created investor");
        Ok(model.id)
    }

    async fn list(&self) -> InvestorResult<Vec<Investor>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i64) -> InvestorResult<Investor> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(InvestorError::NotFound(id))
    }

    async fn update(&self, investor: Investor) -> InvestorResult<()> {
        let changes = entity::ActiveModel {
            name: Set(investor.name),
            contributions: Set(investor.contributions),
            contribution_date: Set(investor.contribution_date),
            percentage: Set(investor.percentage),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(investor.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(InvestorError::NotFound(investor.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> InvestorResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(InvestorError::NotFound(id));
        }
        tracing::info!(investor_id = id, "Deleted investor");
        Ok(())
    }
}
