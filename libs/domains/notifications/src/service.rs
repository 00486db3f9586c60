use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{NotificationError, NotificationResult};
use crate::models::{Email, VerificationMessage};
use crate::providers::{EmailProvider, SentEmail};

pub struct NotificationService<P: EmailProvider> {
    provider: Arc<P>,
}

impl<P: EmailProvider> Clone for NotificationService<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<P: EmailProvider> NotificationService<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    #[instrument(skip(self, email), fields(to = %email.address, provider = self.provider.name()))]
    pub async fn send_email(&self, email: Email) -> NotificationResult<SentEmail> {
        email
            .validate()
            .map_err(|e| NotificationError::Validation(e.to_string()))?;

        self.provider.send(&email).await
    }

    /// Mail `message.token` to `message.email`.
    #[instrument(skip(self, message), fields(to = %message.email))]
    pub async fn send_verification(
        &self,
        message: VerificationMessage,
    ) -> NotificationResult<SentEmail> {
        message
            .validate()
            .map_err(|e| NotificationError::Validation(e.to_string()))?;

        self.send_email(message.into_email()).await
    }
}
