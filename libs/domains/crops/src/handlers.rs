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
use crate::error::CropResult;
use crate::models::{CreateCrop, Crop, UpdateCrop};
use crate::repository::CropRepository;
use crate::service::CropService;

/// OpenAPI documentation for the Crops API
#[derive(OpenApi)]
#[openapi(
    paths(list_crops, create_crop, get_crop, update_crop, delete_crop),
    components(
        schemas(Crop, CreateCrop, UpdateCrop, CreatedResponse, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Crop catalog")
    )
)]
pub struct ApiDoc;

/// `/public` CRUD routes plus the JWT-guarded `/protected` group
pub fn router<R: CropRepository + 'static>(service: CropService<R>, auth: JwtAuth) -> Router {
    let public = Router::new()
        .route("/", get(list_crops).post(create_crop))
        .route(
            "/{id}",
            get(get_crop).put(update_crop).delete(delete_crop),
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
        (status = 200, description = "All crops", body = Vec<Crop>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_crops<R: CropRepository>(
    State(service): State<Arc<CropService<R>>>,
) -> CropResult<Json<Vec<Crop>>> {
    Ok(Json(service.list_crops().await?))
}

#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateCrop,
    responses(
        (status = 201, description = "Crop created", body = CreatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_crop<R: CropRepository>(
    State(service): State<Arc<CropService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCrop>,
) -> CropResult<CreatedResponse> {
    let id = service.create_crop(input.into()).await?;
    Ok(CreatedResponse::new(id))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Crop ID")),
    responses(
        (status = 200, description = "Crop found", body = Crop),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_crop<R: CropRepository>(
    State(service): State<Arc<CropService<R>>>,
    IdPath(id): IdPath,
) -> CropResult<Json<Crop>> {
    Ok(Json(service.get_crop(id).await?))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Crop ID")),
    request_body = UpdateCrop,
    responses(
        (status = 200, description = "Crop updated", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_crop<R: CropRepository>(
    State(service): State<Arc<CropService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateCrop>,
) -> CropResult<MessageResponse> {
    service.update_crop(id, input).await?;
    Ok(MessageResponse::updated())
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Crop ID")),
    responses(
        (status = 200, description = "Crop deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_crop<R: CropRepository>(
    State(service): State<Arc<CropService<R>>>,
    IdPath(id): IdPath,
) -> CropResult<MessageResponse> {
    service.delete_crop(id).await?;
    Ok(MessageResponse::deleted())
}
