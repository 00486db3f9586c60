use sea_orm::entity::prelude::*;

/// Sea-ORM entity for the `lots` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub hectares: f64,
    pub season: String,
    pub field_id: i64,
    pub previous_crop_id: i64,
    pub current_crop_id: i64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TAG: &'static str = "lots";
}

impl From<Model> for crate::models::Lot {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            hectares: model.hectares,
            season: model.season,
            field_id: model.field_id,
            previous_crop_id: model.previous_crop_id,
            current_crop_id: model.current_crop_id,
            previous_crop: None,
            current_crop: None,
        }
    }
}
