use axum::{Router, extract::State, routing::post};
use axum_helpers::{
    JwtAuth, MessageResponse, ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse},
    protected_router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::TAG;
use crate::error::NotificationResult;
use crate::models::{Email, VerificationMessage};
use crate::providers::EmailProvider;
use crate::service::NotificationService;

/// OpenAPI documentation for the Notifications API
#[derive(OpenApi)]
#[openapi(
    paths(send_email, send_verification),
    components(
        schemas(Email, VerificationMessage, MessageResponse),
        responses(BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Outbound email")
    )
)]
pub struct ApiDoc;

pub fn router<P: EmailProvider + 'static>(
    service: NotificationService<P>,
    auth: JwtAuth,
) -> Router {
    let public = Router::new()
        .route("/email", post(send_email))
        .route("/verification", post(send_verification))
        .with_state(Arc::new(service));

    Router::new()
        .nest("/public", public)
        .nest("/protected", protected_router(auth))
}

#[utoipa::path(
    post,
    path = "/email",
    tag = TAG,
    request_body = Email,
    responses(
        (status = 200, description = "Email accepted by the provider", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 503, description = "The provider could not deliver the email")
    )
)]
async fn send_email<P: EmailProvider>(
    State(service): State<Arc<NotificationService<P>>>,
    ValidatedJson(email): ValidatedJson<Email>,
) -> NotificationResult<MessageResponse> {
    service.send_email(email).await?;
    Ok(MessageResponse::sent())
}

#[utoipa::path(
    post,
    path = "/verification",
    tag = TAG,
    request_body = VerificationMessage,
    responses(
        (status = 200, description = "Verification email accepted", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 503, description = "The provider could not deliver the email")
    )
)]
async fn send_verification<P: EmailProvider>(
    State(service): State<Arc<NotificationService<P>>>,
    ValidatedJson(message): ValidatedJson<VerificationMessage>,
) -> NotificationResult<MessageResponse> {
    service.send_verification(message).await?;
    Ok(MessageResponse::sent())
}
