use axum::Router;
use domain_notifications::{NotificationResult, NotificationService, SmtpProvider, handlers};

/// Email routes backed by the SMTP server from `SMTP_*`.
pub fn router(state: &crate::state::AppState) -> NotificationResult<Router> {
    let provider = SmtpProvider::new(&state.config.smtp)?;
    Ok(handlers::router(
        NotificationService::new(provider),
        state.jwt_auth.clone(),
    ))
}
