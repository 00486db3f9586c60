use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Customer not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// A project still points at this customer.
    #[error("Customer {0} still owns projects")]
    InUse(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CustomerResult<T> = Result<T, CustomerError>;

impl From<DbErr> for CustomerError {
    fn from(err: DbErr) -> Self {
        CustomerError::Internal(format!("Database error: {err}"))
    }
}

impl From<CustomerError> for AppError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound(id) => AppError::NotFound(format!("Customer {id} not found")),
            CustomerError::Validation(msg) => AppError::BadRequest(msg),
            CustomerError::InUse(id) => {
                AppError::Conflict(format!("Customer {id} still owns projects"))
            }
            CustomerError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CustomerError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_customer_in_use_is_conflict() {
        let app: AppError = CustomerError::InUse(10).into();
        assert_eq!(app.status(), StatusCode::CONFLICT);
        assert_eq!(app.error_code(), axum_helpers::ErrorCode::Conflict);
    }
}
