use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A customer owning zero or more projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Customer {
    /// Storage-assigned id; `0` means "create me" inside a project payload
    #[serde(default)]
    #[schema(example = 10)]
    pub id: i64,
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Client A")]
    pub name: String,
    #[serde(rename = "type", default)]
    #[validate(length(max = 100))]
    #[schema(example = "company")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateCustomer {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(rename = "type", default)]
    #[validate(length(max = 100))]
    pub kind: String,
}

impl From<CreateCustomer> for Customer {
    fn from(input: CreateCustomer) -> Self {
        Self {
            id: 0,
            name: input.name,
            kind: input.kind,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateCustomer {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(max = 100))]
    pub kind: Option<String>,
}

impl Customer {
    pub fn apply_update(&mut self, update: UpdateCustomer) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
    }
}

/// Query string for `GET /suggest`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SuggestQuery {
    /// Partial customer name
    #[serde(default)]
    pub q: String,
}
