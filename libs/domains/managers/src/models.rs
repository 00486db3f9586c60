use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A farm manager; projects reference many managers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Manager {
    #[serde(default)]
    #[schema(example = 20)]
    pub id: i64,
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Manager A")]
    pub name: String,
    /// Role label, e.g. `agronomist`
    #[serde(rename = "type", default)]
    #[validate(length(max = 50))]
    #[schema(example = "agronomist")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateManager {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(rename = "type", default)]
    #[validate(length(max = 50))]
    pub kind: String,
}

impl From<CreateManager> for Manager {
    fn from(input: CreateManager) -> Self {
        Self {
            id: 0,
            name: input.name,
            kind: input.kind,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateManager {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(max = 50))]
    pub kind: Option<String>,
}

impl Manager {
    pub fn apply_update(&mut self, update: UpdateManager) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
    }
}
