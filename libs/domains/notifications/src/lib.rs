//! Notifications Domain
//!
//! Outbound email. The service validates messages and hands them to an
//! [`EmailProvider`]; [`SmtpProvider`] delivers them over SMTP with lettre.

pub mod error;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod service;

pub use error::{NotificationError, NotificationResult};
pub use models::{Email, VerificationMessage};
pub use providers::{EmailProvider, SentEmail, SmtpConfig, SmtpProvider};
pub use service::NotificationService;

/// Route segment and OpenAPI tag for this domain
pub const TAG: &str = "notifications";
