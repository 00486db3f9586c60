use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_lots::LotError;
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Field not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{context}: {source}")]
    Lot {
        context: String,
        #[source]
        source: LotError,
    },

    /// Field creation failed and rolling back what it had written failed too.
    /// `source` is the error that triggered the rollback.
    #[error("{source} ({} rollback step(s) failed)", .failures.len())]
    Compensation {
        #[source]
        source: Box<FieldError>,
        failures: Vec<String>,
    },
}

pub type FieldResult<T> = Result<T, FieldError>;

impl From<DbErr> for FieldError {
    fn from(err: DbErr) -> Self {
        FieldError::Internal(format!("Database error: {err}"))
    }
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::NotFound(id) => AppError::NotFound(format!("Field {id} not found")),
            FieldError::Validation(msg) => AppError::BadRequest(msg),
            FieldError::Internal(msg) => AppError::InternalServerError(msg),
            FieldError::Lot { context, source } => AppError::from(source).context(context),
            FieldError::Compensation { source, failures } => AppError::from(*source)
                .with_details(json!({ "compensation_failures": failures })),
        }
    }
}

impl IntoResponse for FieldError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
