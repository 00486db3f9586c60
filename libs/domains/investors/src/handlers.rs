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
use crate::error::InvestorResult;
use crate::models::{CreateInvestor, Investor, UpdateInvestor};
use crate::repository::InvestorRepository;
use crate::service::InvestorService;

/// OpenAPI documentation for the Investors API
#[derive(OpenApi)]
#[openapi(
    paths(list_investors, create_investor, get_investor, update_investor, delete_investor),
    components(
        schemas(Investor, CreateInvestor, UpdateInvestor, CreatedResponse, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Project investors")
    )
)]
pub struct ApiDoc;

pub fn router<R: InvestorRepository + 'static>(
    service: InvestorService<R>,
    auth: JwtAuth,
) -> Router {
    let public = Router::new()
        .route("/", get(list_investors).post(create_investor))
        .route(
            "/{id}",
            get(get_investor).put(update_investor).delete(delete_investor),
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
        (status = 200, description = "All investors", body = Vec<Investor>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_investors<R: InvestorRepository>(
    State(service): State<Arc<InvestorService<R>>>,
) -> InvestorResult<Json<Vec<Investor>>> {
    Ok(Json(service.list_investors().await?))
}

#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateInvestor,
    responses(
        (status = 201, description = "Investor created", body = CreatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_investor<R: InvestorRepository>(
    State(service): State<Arc<InvestorService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateInvestor>,
) -> InvestorResult<CreatedResponse> {
    let id = service.create_investor(input.into()).await?;
    Ok(CreatedResponse::new(id))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Investor ID")),
    responses(
        (status = 200, description = "Investor found", body = Investor),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_investor<R: InvestorRepository>(
    State(service): State<Arc<InvestorService<R>>>,
    IdPath(id): IdPath,
) -> InvestorResult<Json<Investor>> {
    Ok(Json(service.get_investor(id).await?))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Investor ID")),
    request_body = UpdateInvestor,
    responses(
        (status = 200, description = "Investor updated", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_investor<R: InvestorRepository>(
    State(service): State<Arc<InvestorService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateInvestor>,
) -> InvestorResult<MessageResponse> {
    service.update_investor(id, input).await?;
    Ok(MessageResponse::updated())
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(("id" = i64, Path, description = "Investor ID")),
    responses(
        (status = 200, description = "Investor deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_investor<R: InvestorRepository>(
    State(service): State<Arc<InvestorService<R>>>,
    IdPath(id): IdPath,
) -> InvestorResult<MessageResponse> {
    service.delete_investor(id).await?;
    Ok(MessageResponse::deleted())
}
