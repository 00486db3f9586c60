//! Email delivery backends.

mod smtp;

pub use smtp::{SmtpConfig, SmtpProvider};

use async_trait::async_trait;

use crate::error::NotificationResult;
use crate::models::Email;

/// Outcome of a delivery the provider accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentEmail {
    /// Provider-specific message id, when one is reported
    pub message_id: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &Email) -> NotificationResult<SentEmail>;

    /// Provider name for logs
    fn name(&self) -> &'static str;
}
