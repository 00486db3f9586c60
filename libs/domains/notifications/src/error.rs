use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The provider refused or could not deliver the message.
    #[error("Provider error: {0}")]
    Provider(String),
}

pub type NotificationResult<T> = Result<T, NotificationError>;

impl From<NotificationError> for AppError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::Validation(msg) => AppError::BadRequest(msg),
            NotificationError::Provider(msg) => AppError::ServiceUnavailable(msg),
        }
    }
}

impl IntoResponse for NotificationError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
