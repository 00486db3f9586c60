use axum::Router;
use domain_crops::{CropService, PgCropRepository, handlers};

pub fn service(state: &crate::state::AppState) -> CropService<PgCropRepository> {
    CropService::new(PgCropRepository::new(state.db.clone()))
}

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(service(state), state.jwt_auth.clone())
}
