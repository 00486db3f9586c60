use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    CreatedResponse, IdPath, JwtAuth, MessageResponse, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    protected_router,
};
use domain_crops::Crop;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::LotResult;
use crate::models::{CreateLot, Lot, UpdateLot};
use crate::repository::LotRepository;
use crate::service::LotService;

/// OpenAPI documentation for the Lots API
#[derive(OpenApi)]
#[openapi(
    paths(list_lots, create_lot, get_lot, update_lot, delete_lot),
    components(
        schemas(Lot, CreateLot, UpdateLot, Crop, CreatedResponse, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Land parcels with embedded crops")
    )
)]
pub struct ApiDoc;

pub fn router<R: LotRepository + 'static>(
    service: LotService<R>,
    auth: JwtAuth,
) -> Router {
    let public = Router::new()
        .route("/", get(list_lots).post(create_lot))
        .route(
            "/{id}",
            get(get_lot).put(update_lot).delete(delete_lot),
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
        (status = 200, description = "All lots", body = Vec<Lot>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_lots<R: LotRepository>(
    State(service): State<Arc<LotService<R>>>,
) -> LotResult<Json<Vec<Lot>>> {
    Ok(Json(service.list_lots().await?))
}

#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateLot,
    responses(
        (status = 201, description = "Lot created", body = CreatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_lot<R: LotRepository>(
    State(service): State<Arc<LotService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateLot>,
) -> LotResult<CreatedResponse> {
    let id = service.create_lot(input.into()).await?;
    Ok(CreatedResponse::new(id))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Lot ID")),
    responses(
        (status = 200, description = "Lot found", body = Lot),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_lot<R: LotRepository>(
    State(service): State<Arc<LotService<R>>>,
    IdPath(id): IdPath,
) -> LotResult<Json<Lot>> {
    Ok(Json(service.get_lot(id).await?))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Lot ID")),
    request_body = UpdateLot,
    responses(
        (status = 200, description = "Lot updated", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_lot<R: LotRepository>(
    State(service): State<Arc<LotService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateLot>,
) -> LotResult<MessageResponse> {
    service.update_lot(id, input).await?;
    Ok(MessageResponse::updated())
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Lot ID")),
    responses(
        (status = 200, description = "Lot deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_lot<R: LotRepository>(
    State(service): State<Arc<LotService<R>>>,
    IdPath(id): IdPath,
) -> LotResult<MessageResponse> {
    service.delete_lot(id).await?;
    Ok(MessageResponse::deleted())
}
