use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Manager not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ManagerResult<T> = Result<T, ManagerError>;

impl From<DbErr> for ManagerError {
    fn from(err: DbErr) -> Self {
        ManagerError::Internal(format!("Database error: {err}"))
    }
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::NotFound(id) => AppError::NotFound(format!("Manager {id} not found")),
            ManagerError::Validation(msg) => AppError::BadRequest(msg),
            ManagerError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ManagerError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
