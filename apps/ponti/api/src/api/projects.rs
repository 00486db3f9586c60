use std::sync::Arc;

use axum::Router;
use domain_projects::{PgProjectRepository, ProjectService, handlers};

/// The project service drives the other domains through their own services, so a
/// saga step goes through the same validation as a direct API call.
pub fn router(state: &crate::state::AppState) -> Router {
    let service = ProjectService::new(
        PgProjectRepository::new(state.db.clone()),
        Arc::new(super::customers::service(state)),
        Arc::new(super::managers::service(state)),
        Arc::new(super::investors::service(state)),
        Arc::new(super::fields::service(state)),
    );
    handlers::router(service, state.jwt_auth.clone())
}
