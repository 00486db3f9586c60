use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    CreatedResponse, IdPath, JwtAuth, MessageResponse, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    protected_router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::ManagerResult;
use crate::models::{CreateManager, Manager, UpdateManager};
use crate::repository::ManagerRepository;
use crate::service::ManagerService;

/// OpenAPI documentation for the Managers API
#[derive(OpenApi)]
#[openapi(
    paths(list_managers, create_manager, get_manager, update_manager, delete_manager),
    components(
        schemas(Manager, CreateManager, UpdateManager, CreatedResponse, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Farm managers")
    )
)]
pub struct ApiDoc;

pub fn router<R: ManagerRepository + 'static>(
    service: ManagerService<R>,
    auth: JwtAuth,
) -> Router {
    let public = Router::new()
        .route("/", get(list_managers).post(create_manager))
        .route(
            "/{id}",
            get(get_manager).put(update_manager).delete(delete_manager),
        )
        .with_state(Arc::new(service));

    Router::new()
        .nest("/public", public)
        .nest("/protected", protected_router(auth))
}

#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All managers", body = Vec<Manager>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_managers<R: ManagerRepository>(
    State(service): State<Arc<ManagerService<R>>>,
) -> ManagerResult<Json<Vec<Manager>>> {
    Ok(Json(service.list_managers().await?))
}

#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateManager,
    responses(
        (status = 201, description = "Manager created", body = CreatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_manager<R: ManagerRepository>(
    State(service): State<Arc<ManagerService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateManager>,
) -> ManagerResult<CreatedResponse> {
    let id = service.create_manager(input.into()).await?;
    Ok(CreatedResponse::new(id))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Manager ID")),
    responses(
        (status = 200, description = "Manager found", body = Manager),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_manager<R: ManagerRepository>(
    State(service): State<Arc<ManagerService<R>>>,
    IdPath(id): IdPath,
) -> ManagerResult<Json<Manager>> {
    Ok(Json(service.get_manager(id).await?))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Manager ID")),
    request_body = UpdateManager,
    responses(
        (status = 200, description = "Manager updated", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_manager<R: ManagerRepository>(
    State(service): State<Arc<ManagerService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateManager>,
) -> ManagerResult<MessageResponse> {
    service.update_manager(id, input).await?;
    Ok(MessageResponse::updated())
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Manager ID")),
    responses(
        (status = 200, description = "Manager deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_manager<R: ManagerRepository>(
    State(service): State<Arc<ManagerService<R>>>,
    IdPath(id): IdPath,
) -> ManagerResult<MessageResponse> {
    service.delete_manager(id).await?;
    Ok(MessageResponse::deleted())
}
