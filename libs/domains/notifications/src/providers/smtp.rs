//! SMTP provider built on lettre.
//!
//! Without TLS it talks plain SMTP, which suits local catchers such as Mailpit.

use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or_default};
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::{debug, error, info};

use super::{EmailProvider, SentEmail};
use crate::error::{NotificationError, NotificationResult};
use crate::models::Email;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub from_email: String,
    pub from_name: String,
    /// Optional for local servers
    pub username: Option<String>,
    pub password: Option<String>,
    pub use_tls: bool,
}

impl FromEnv for SmtpConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or_default("SMTP_HOST", "localhost"),
            port: env_parse_or_default("SMTP_PORT", "1025")?,
            from_email: env_or_default("SMTP_FROM_EMAIL", "noreply@localhost"),
            from_name: env_or_default("SMTP_FROM_NAME", "Ponti"),
            username: std::env::var("SMTP_USERNAME").ok(),
            password: std::env::var("SMTP_PASSWORD").ok(),
            use_tls: env_parse_or_default("SMTP_USE_TLS", "false")?,
        })
    }
}

pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    host: String,
}

impl SmtpProvider {
    pub fn new(config: &SmtpConfig) -> NotificationResult<Self> {
        let from = format!("{} <{}>", config.from_name, config.from_email)
            .parse()
            .map_err(|e| NotificationError::Provider(format!("Invalid from address: {e}")))?;

        Ok(Self {
            transport: Self::build_transport(config)?,
            from,
            host: config.host.clone(),
        })
    }

    fn build_transport(
        config: &SmtpConfig,
    ) -> NotificationResult<AsyncSmtpTransport<Tokio1Executor>> {
        let builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| NotificationError::Provider(format!("Invalid SMTP relay: {e}")))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };
        let mut builder = builder.port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(builder.build())
    }

    fn build_message(&self, email: &Email) -> NotificationResult<Message> {
        let to: Mailbox = email
            .address
            .parse()
            .map_err(|e| NotificationError::Validation(format!("Invalid to address: {e}")))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.body.clone())
            .map_err(|e| NotificationError::Provider(format!("Failed to build message: {e}")))
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &Email) -> NotificationResult<SentEmail> {
        debug!(to = %email.address, host = %self.host, "Sending email via SMTP");

        let message = self.build_message(email)?;
        let response = self.transport.send(message).await.map_err(|e| {
            error!(to = %email.address, error = %e, "Failed to send email via SMTP");
            NotificationError::Provider(format!("SMTP send failed: {e}"))
        })?;

        let message_id = response.message().next().map(str::to_string);
        info!(to = %email.address, message_id = ?message_id, "Email sent via SMTP");

        Ok(SentEmail { message_id })
    }

    fn name(&self) -> &'static str {
        "SMTP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig {
            host: "localhost".into(),
            port: 1025,
            from_email: "noreply@ponti.example".into(),
            from_name: "Ponti".into(),
            username: None,
            password: None,
            use_tls: false,
        }
    }

    #[test]
    fn test_config_defaults_target_local_catcher() {
        temp_env::with_vars(
            [
                ("SMTP_HOST", None::<&str>),
                ("SMTP_PORT", None),
                ("SMTP_USE_TLS", None),
                ("SMTP_USERNAME", None),
            ],
            || {
                let config = SmtpConfig::from_env().unwrap();
                assert_eq!(config.host, "localhost");
                assert_eq!(config.port, 1025);
                assert!(!config.use_tls);
                assert_eq!(config.username, None);
            },
        );
    }

    #[test]
    fn test_config_rejects_non_numeric_port() {
        temp_env::with_var("SMTP_PORT", Some("smtp"), || {
            assert!(SmtpConfig::from_env().is_err());
        });
    }

    #[tokio::test]
    async fn test_message_carries_sender_and_subject() {
        let provider = SmtpProvider::new(&config()).unwrap();
        let message = provider
            .build_message(&Email {
                address: "ana@campo.example".into(),
                subject: "Campaign 2025 closed".into(),
                body: "<p>Closed</p>".into(),
            })
            .unwrap();

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("From: Ponti <noreply@ponti.example>"));
        assert!(raw.contains("To: ana@campo.example"));
        assert!(raw.contains("Subject: Campaign 2025 closed"));
    }

    #[test]
    fn test_bad_sender_address_is_rejected() {
        let result = SmtpProvider::new(&SmtpConfig {
            from_email: "not an address".into(),
            ..config()
        });
        assert!(matches!(result, Err(NotificationError::Provider(_))));
    }
}
