use sea_orm::entity::prelude::*;

/// Sea-ORM entity for the `investors` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "investors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub contributions: f64,
    pub contribution_date: Date,
    pub percentage: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TAG: &'static str = "investors";
}

impl From<Model> for crate::models::Investor {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            contributions: model.contributions,
            contribution_date: model.contribution_date,
            percentage: model.percentage,
        }
    }
}
