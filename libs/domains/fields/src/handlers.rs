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
use crate::error::FieldResult;
use crate::models::{CreateField, Field, UpdateField};
use crate::repository::FieldRepository;
use crate::service::FieldService;

/// OpenAPI documentation for the Fields API
#[derive(OpenApi)]
#[openapi(
    paths(list_fields, create_field, get_field, update_field, delete_field),
    components(
        schemas(Field, CreateField, UpdateField, CreatedResponse, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Fields and their lots")
    )
)]
pub struct ApiDoc;

pub fn router<R: FieldRepository + 'static>(
    service: FieldService<R>,
    auth: JwtAuth,
) -> Router {
    let public = Router::new()
        .route("/", get(list_fields).post(create_field))
        .route(
            "/{id}",
            get(get_field).put(update_field).delete(delete_field),
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
        (status = 200, description = "All fields", body = Vec<Field>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_fields<R: FieldRepository>(
    State(service): State<Arc<FieldService<R>>>,
) -> FieldResult<Json<Vec<Field>>> {
    Ok(Json(service.list_fields().await?))
}

#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateField,
    responses(
        (status = 201, description = "Field created", body = CreatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_field<R: FieldRepository>(
    State(service): State<Arc<FieldService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateField>,
) -> FieldResult<CreatedResponse> {
    let id = service.create_field(input.into()).await?;
    Ok(CreatedResponse::new(id))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Field ID")),
    responses(
        (status = 200, description = "Field found", body = Field),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_field<R: FieldRepository>(
    State(service): State<Arc<FieldService<R>>>,
    IdPath(id): IdPath,
) -> FieldResult<Json<Field>> {
    Ok(Json(service.get_field(id).await?))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Field ID")),
    request_body = UpdateField,
    responses(
        (status = 200, description = "Field updated", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_field<R: FieldRepository>(
    State(service): State<Arc<FieldService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateField>,
) -> FieldResult<MessageResponse> {
    service.update_field(id, input).await?;
    Ok(MessageResponse::updated())
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Field ID")),
    responses(
        (status = 200, description = "Field deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_field<R: FieldRepository>(
    State(service): State<Arc<FieldService<R>>>,
    IdPath(id): IdPath,
) -> FieldResult<MessageResponse> {
    service.delete_field(id).await?;
    Ok(MessageResponse::deleted())
}
