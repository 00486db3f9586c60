use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_active() -> bool {
    true
}

/// A login account, optionally linked to a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct User {
    #[serde(default)]
    #[schema(example = 3)]
    pub id: i64,
    #[validate(length(min = 3, max = 50))]
    #[schema(example = "apereyra")]
    pub username: String,
    #[validate(email)]
    #[schema(example = "ana@campo.example")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    #[schema(example = 5)]
    pub person_id: Option<i64>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: 0,
            username: String::new(),
            email: String::new(),
            person_id: None,
            active: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateUser {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub person_id: Option<i64>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl From<CreateUser> for User {
    fn from(input: CreateUser) -> Self {
        Self {
            id: 0,
            username: input.username,
            email: input.email,
            person_id: input.person_id,
            active: input.active,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 3, max = 50))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(range(min = 1))]
    pub person_id: Option<i64>,
    pub active: Option<bool>,
}

impl User {
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if update.person_id.is_some() {
            self.person_id = update.person_id;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
    }
}
