use domain_lots::Lot;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A field with its lots.
///
/// `lots` is never persisted with the field row. On create it carries the lots to
/// insert; on reads it holds every lot whose `field_id` matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Field {
    #[serde(default)]
    #[schema(example = 40)]
    pub id: i64,
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Field A")]
    pub name: String,
    #[validate(range(min = 1))]
    #[schema(example = 1)]
    pub lease_type_id: i64,
    #[serde(default)]
    #[validate(nested)]
    pub lots: Vec<Lot>,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateField {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 1))]
    pub lease_type_id: i64,
    #[serde(default)]
    #[validate(nested)]
    pub lots: Vec<Lot>,
}

impl From<CreateField> for Field {
    fn from(input: CreateField) -> Self {
        Self {
            id: 0,
            name: input.name,
            lease_type_id: input.lease_type_id,
            lots: input.lots,
        }
    }
}

/// Scalar update; lots are managed through the lots API.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateField {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(range(min = 1))]
    pub lease_type_id: Option<i64>,
}

impl Field {
    pub fn apply_update(&mut self, update: UpdateField) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(lease_type_id) = update.lease_type_id {
            self.lease_type_id = lease_type_id;
        }
    }
}
