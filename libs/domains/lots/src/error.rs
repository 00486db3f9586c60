use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_crops::CropError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LotError {
    #[error("Lot not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// A crop lookup made while enriching a lot failed.
    #[error("{context}: {source}")]
    Crop {
        context: String,
        #[source]
        source: CropError,
    },
}

pub type LotResult<T> = Result<T, LotError>;

impl From<DbErr> for LotError {
    fn from(err: DbErr) -> Self {
        LotError::Internal(format!("Database error: {err}"))
    }
}

impl From<LotError> for AppError {
    fn from(err: LotError) -> Self {
        match err {
            LotError::NotFound(id) => AppError::NotFound(format!("Lot {id} not found")),
            LotError::Validation(msg) => AppError::BadRequest(msg),
            LotError::Internal(msg) => AppError::InternalServerError(msg),
            LotError::Crop { context, source } => AppError::from(source).context(context),
        }
    }
}

impl IntoResponse for LotError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_missing_crop_keeps_not_found_status() {
        let err = LotError::Crop {
            context: "fetch current crop 2".into(),
            source: CropError::NotFound(2),
        };
        assert_eq!(err.to_string(), "fetch current crop 2: Crop not found: 2");

        let app: AppError = err.into();
        assert_eq!(app.status(), StatusCode::NOT_FOUND);
    }
}
