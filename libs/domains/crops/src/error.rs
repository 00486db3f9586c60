use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CropError {
    #[error("Crop not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CropResult<T> = Result<T, CropError>;

impl From<DbErr> for CropError {
    fn from(err: DbErr) -> Self {
        CropError::Internal(format!("Database error: {err}"))
    }
}

impl From<CropError> for AppError {
    fn from(err: CropError) -> Self {
        match err {
            CropError::NotFound(id) => AppError::NotFound(format!("Crop {id} not found")),
            CropError::Validation(msg) => AppError::BadRequest(msg),
            CropError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CropError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
