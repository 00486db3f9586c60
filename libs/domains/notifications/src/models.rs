use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An email ready to hand to a provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Email {
    #[validate(email)]
    #[schema(example = "ana@campo.example")]
    pub address: String,
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Campaign 2025 closed")]
    pub subject: String,
    /// HTML body, sent as given
    #[serde(rename = "body_template")]
    #[validate(length(min = 1))]
    #[schema(example = "<p>The 2025 campaign has been closed.</p>")]
    pub body: String,
}

/// Account verification request carrying the token to mail out.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct VerificationMessage {
    #[validate(email)]
    #[schema(example = "ana@campo.example")]
    pub email: String,
    #[validate(length(min = 1, max = 512))]
    #[schema(example = "c2VjcmV0LXRva2Vu")]
    pub token: String,
}

impl VerificationMessage {
    pub const SUBJECT: &'static str = "Verify your email address";

    pub fn into_email(self) -> Email {
        Email {
            body: format!(
                "<p>Use this code to verify your email address:</p><p><strong>{}</strong></p>",
                self.token
            ),
            address: self.email,
            subject: Self::SUBJECT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_travels_as_body_template() {
        let email: Email = serde_json::from_str(
            r#"{"address":"ana@campo.example","subject":"Hi","body_template":"<p>Hi</p>"}"#,
        )
        .unwrap();
        assert_eq!(email.body, "<p>Hi</p>");
        assert!(email.validate().is_ok());
    }

    #[test]
    fn test_missing_address_is_rejected() {
        let email = Email {
            subject: "Hi".into(),
            body: "<p>Hi</p>".into(),
            ..Default::default()
        };
        let errors = email.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("address"));
    }

    #[test]
    fn test_verification_email_embeds_token() {
        let email = VerificationMessage {
            email: "ana@campo.example".into(),
            token: "481516".into(),
        }
        .into_email();

        assert_eq!(email.address, "ana@campo.example");
        assert_eq!(email.subject, VerificationMessage::SUBJECT);
        assert!(email.body.contains("481516"));
    }
}
