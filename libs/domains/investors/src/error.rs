use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvestorError {
    #[error("Investor not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InvestorResult<T> = Result<T, InvestorError>;

impl From<DbErr> for InvestorError {
    fn from(err: DbErr) -> Self {
        InvestorError::Internal(format!("Database error: {err}"))
    }
}

impl From<InvestorError> for AppError {
    fn from(err: InvestorError) -> Self {
        match err {
            InvestorError::NotFound(id) => AppError::NotFound(format!("Investor {id} not found")),
            InvestorError::Validation(msg) => AppError::BadRequest(msg),
            InvestorError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for InvestorError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
