use domain_crops::Crop;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A land parcel inside a field.
///
/// Storage keeps only the crop ids; `previous_crop` and `current_crop` are filled in
/// on reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Lot {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i64,
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Lot A")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    #[schema(example = 10.0)]
    pub hectares: f64,
    #[serde(default)]
    #[validate(length(max = 20))]
    #[schema(example = "2025")]
    pub season: String,
    /// Owning field. Left at zero for lots nested in a field being created; the field
    /// service assigns it.
    #[serde(default)]
    pub field_id: i64,
    #[validate(range(min = 1))]
    pub previous_crop_id: i64,
    #[validate(range(min = 1))]
    pub current_crop_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_crop: Option<Crop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_crop: Option<Crop>,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateLot {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    pub hectares: f64,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub season: String,
    #[validate(range(min = 1))]
    pub field_id: i64,
    #[validate(range(min = 1))]
    pub previous_crop_id: i64,
    #[validate(range(min = 1))]
    pub current_crop_id: i64,
}

impl From<CreateLot> for Lot {
    fn from(input: CreateLot) -> Self {
        Self {
            id: 0,
            name: input.name,
            hectares: input.hectares,
            season: input.season,
            field_id: input.field_id,
            previous_crop_id: input.previous_crop_id,
            current_crop_id: input.current_crop_id,
            previous_crop: None,
            current_crop: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateLot {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub hectares: Option<f64>,
    #[validate(length(max = 20))]
    pub season: Option<String>,
    #[validate(range(min = 1))]
    pub field_id: Option<i64>,
    #[validate(range(min = 1))]
    pub previous_crop_id: Option<i64>,
    #[validate(range(min = 1))]
    pub current_crop_id: Option<i64>,
}

impl Lot {
    pub fn apply_update(&mut self, update: UpdateLot) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(hectares) = update.hectares {
            self.hectares = hectares;
        }
        if let Some(season) = update.season {
            self.season = season;
        }
        if let Some(field_id) = update.field_id {
            self.field_id = field_id;
        }
        if let Some(id) = update.previous_crop_id {
            self.previous_crop_id = id;
        }
        if let Some(id) = update.current_crop_id {
            self.current_crop_id = id;
        }
    }
}
