use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A crop type referenced by lots (e.g. soy, maize).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Crop {
    /// Storage-assigned id; `0` until created
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i64,
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "Soja")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateCrop {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}

impl From<CreateCrop> for Crop {
    fn from(input: CreateCrop) -> Self {
        Self {
            id: 0,
            name: input.name,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateCrop {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
}

impl Crop {
    pub fn apply_update(&mut self, update: UpdateCrop) {
        if let Some(name) = update.name {
            self.name = name;
        }
    }
}
