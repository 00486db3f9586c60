use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    entity::{self, project_fields, project_investors, project_managers},
    error::{ProjectError, ProjectResult},
    models::ProjectRecord,
    repository::ProjectRepository,
};

#[derive(Clone)]
pub struct PgProjectRepository {
    db: DatabaseConnection,
}

impl PgProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_links(&self, models: Vec<entity::Model>) -> ProjectResult<Vec<ProjectRecord>> {
        let mut records: Vec<ProjectRecord> = models.into_iter().map(Into::into).collect();
        if !records.is_empty() {
            load_links(&self.db, &mut records).await?;
        }
        Ok(records)
    }
}

impl From<entity::Model> for ProjectRecord {
    fn from(model: entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            customer_id: model.customer_id,
            ..Default::default()
        }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn create(&self, project: ProjectRecord) -> ProjectResult<i64> {
        let tx = self.db.begin().await?;

        let now = Utc::now().fixed_offset();
        let model = entity::ActiveModel {
            name: Set(project.name.clone()),
            customer_id: Set(project.customer_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&tx)
        .await?;

        insert_links(&tx, model.id, &project).await?;
        tx.commit().await?;

        tracing::info!(
            project_id = model.id,
            customer_id = model.customer_id,
            "Created project"
        );
        Ok(model.id)
    }

    async fn list(&self) -> ProjectResult<Vec<ProjectRecord>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        self.with_links(models).await
    }

    async fn list_by_customer(&self, customer_id: i64) -> ProjectResult<Vec<ProjectRecord>> {
        let models = entity::Entity::find()
            .filter(entity::Column::CustomerId.eq(customer_id))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        self.with_links(models).await
    }

    async fn get(&self, id: i64) -> ProjectResult<ProjectRecord> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProjectError::NotFound(id))?;

        self.with_links(vec![model])
            .await?
            .pop()
            .ok_or(ProjectError::NotFound(id))
    }

    async fn update(&self, project: ProjectRecord) -> ProjectResult<()> {
        let tx = self.db.begin().await?;

        let changes = entity::ActiveModel {
            name: Set(project.name.clone()),
            customer_id: Set(project.customer_id),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        let result = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(project.id))
            .exec(&tx)
            .await?;

        if result.rows_affected == 0 {
            return Err(ProjectError::NotFound(project.id));
        }

        clear_links(&tx, project.id).await?;
        insert_links(&tx, project.id, &project).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ProjectResult<()> {
        let tx = self.db.begin().await?;

        clear_links(&tx, id).await?;
        let result = entity::Entity::delete_by_id(id).exec(&tx).await?;

        if result.rows_affected == 0 {
            return Err(ProjectError::NotFound(id));
        }
        tx.commit().await?;

        tracing::info!(project_id = id, "Deleted project");
        Ok(())
    }
}

async fn insert_links(
    tx: &DatabaseTransaction,
    project_id: i64,
    project: &ProjectRecord,
) -> Result<(), DbErr> {
    if !project.manager_ids.is_empty() {
        project_managers::Entity::insert_many(project.manager_ids.iter().map(|&manager_id| {
            project_managers::ActiveModel {
                project_id: Set(project_id),
                manager_id: Set(manager_id),
            }
        }))
        .exec_without_returning(tx)
        .await?;
    }

    if !project.investor_ids.is_empty() {
        project_investors::Entity::insert_many(project.investor_ids.iter().map(|&investor_id| {
            project_investors::ActiveModel {
                project_id: Set(project_id),
                investor_id: Set(investor_id),
            }
        }))
        .exec_without_returning(tx)
        .await?;
    }

    if !project.field_ids.is_empty() {
        project_fields::Entity::insert_many(project.field_ids.iter().map(|&field_id| {
            project_fields::ActiveModel {
                project_id: Set(project_id),
                field_id: Set(field_id),
            }
        }))
        .exec_without_returning(tx)
        .await?;
    }

    Ok(())
}

async fn clear_links(tx: &DatabaseTransaction, project_id: i64) -> Result<(), DbErr> {
    project_managers::Entity::delete_many()
        .filter(project_managers::Column::ProjectId.eq(project_id))
        .exec(tx)
        .await?;
    project_investors::Entity::delete_many()
        .filter(project_investors::Column::ProjectId.eq(project_id))
        .exec(tx)
        .await?;
    project_fields::Entity::delete_many()
        .filter(project_fields::Column::ProjectId.eq(project_id))
        .exec(tx)
        .await?;
    Ok(())
}

/// Fill the id lists of `records` with one query per association table.
async fn load_links<C: ConnectionTrait>(
    db: &C,
    records: &mut [ProjectRecord],
) -> Result<(), DbErr> {
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();

    let managers = project_managers::Entity::find()
        .filter(project_managers::Column::ProjectId.is_in(ids.clone()))
        .order_by_asc(project_managers::Column::ManagerId)
        .all(db)
        .await?;
    let investors = project_investors::Entity::find()
        .filter(project_investors::Column::ProjectId.is_in(ids.clone()))
        .order_by_asc(project_investors::Column::InvestorId)
        .all(db)
        .await?;
    let fields = project_fields::Entity::find()
        .filter(project_fields::Column::ProjectId.is_in(ids))
        .order_by_asc(project_fields::Column::FieldId)
        .all(db)
        .await?;

    for record in records.iter_mut() {
        record.manager_ids = managers
            .iter()
            .filter(|link| link.project_id == record.id)
            .map(|link| link.manager_id)
            .collect();
        record.investor_ids = investors
            .iter()
            .filter(|link| link.project_id == record.id)
            .map(|link| link.investor_id)
            .collect();
        record.field_ids = fields
            .iter()
            .filter(|link| link.project_id == record.id)
            .map(|link| link.field_id)
            .collect();
    }
    Ok(())
}
