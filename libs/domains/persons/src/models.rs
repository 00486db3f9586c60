use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A person with optional contact details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Person {
    #[serde(default)]
    #[schema(example = 5)]
    pub id: i64,
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Ana")]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Pereyra")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    #[schema(example = "ana@campo.example")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 6, max = 30))]
    #[schema(example = "+54 9 11 5555 0101")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreatePerson {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(min = 6, max = 30))]
    pub phone: Option<String>,
}

impl From<CreatePerson> for Person {
    fn from(input: CreatePerson) -> Self {
        Self {
            id: 0,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
        }
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct UpdatePerson {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 6, max = 30))]
    pub phone: Option<String>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn apply_update(&mut self, update: UpdatePerson) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if update.email.is_some() {
            self.email = update.email;
        }
        if update.phone.is_some() {
            self.phone = update.phone;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_email_is_rejected() {
        let person = Person {
            first_name: "Ana".into(),
            last_name: "Pereyra".into(),
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        let errors = person.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_update_keeps_contact_details_when_absent() {
        let mut person = Person {
            id: 5,
            first_name: "Ana".into(),
            last_name: "Pereyra".into(),
            email: Some("ana@campo.example".into()),
            phone: None,
        };
        person.apply_update(UpdatePerson {
            last_name: Some("Gómez".into()),
            ..Default::default()
        });

        assert_eq!(person.full_name(), "Ana Gómez");
        assert_eq!(person.email.as_deref(), Some("ana@campo.example"));
    }
}
