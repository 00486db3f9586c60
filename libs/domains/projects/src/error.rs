use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_customers::CustomerError;
use domain_fields::FieldError;
use domain_investors::InvestorError;
use domain_managers::ManagerError;
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

use crate::saga::CompensationFailure;

/// Project errors. Child failures carry the step that produced them as `context`
/// (`create manager "Manager A"`, `fetch field 40`).
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{context}: {source}")]
    Customer {
        context: String,
        #[source]
        source: CustomerError,
    },

    #[error("{context}: {source}")]
    Manager {
        context: String,
        #[source]
        source: ManagerError,
    },

    #[error("{context}: {source}")]
    Investor {
        context: String,
        #[source]
        source: InvestorError,
    },

    #[error("{context}: {source}")]
    Field {
        context: String,
        #[source]
        source: FieldError,
    },

    /// A create failed and some of the compensating deletes failed too.
    #[error("{source} ({} compensation step(s) failed)", .failures.len())]
    Compensation {
        #[source]
        source: Box<ProjectError>,
        failures: Vec<CompensationFailure>,
    },
}

pub type ProjectResult<T> = Result<T, ProjectError>;

impl From<DbErr> for ProjectError {
    fn from(err: DbErr) -> Self {
        ProjectError::Internal(format!("Database error: {err}"))
    }
}

impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(id) => AppError::NotFound(format!("Project {id} not found")),
            ProjectError::Validation(msg) => AppError::BadRequest(msg),
            ProjectError::Internal(msg) => AppError::InternalServerError(msg),
            ProjectError::Customer { context, source } => AppError::from(source).context(context),
            ProjectError::Manager { context, source } => AppError::from(source).context(context),
            ProjectError::Investor { context, source } => AppError::from(source).context(context),
            ProjectError::Field { context, source } => AppError::from(source).context(context),
            ProjectError::Compensation { source, failures } => {
                let failures: Vec<String> = failures.iter().map(ToString::to_string).collect();
                AppError::from(*source).with_details(json!({ "compensation_failures": failures }))
            }
        }
    }
}

impl IntoResponse for ProjectError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
