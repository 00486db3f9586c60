use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersonError {
    #[error("Person not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PersonResult<T> = Result<T, PersonError>;

impl From<DbErr> for PersonError {
    fn from(err: DbErr) -> Self {
        PersonError::Internal(format!("Database error: {err}"))
    }
}

impl From<PersonError> for AppError {
    fn from(err: PersonError) -> Self {
        match err {
            PersonError::NotFound(id) => AppError::NotFound(format!("Person {id} not found")),
            PersonError::Validation(msg) => AppError::BadRequest(msg),
            PersonError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PersonError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
