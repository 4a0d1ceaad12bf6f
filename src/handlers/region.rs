//! Region CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::{EntityId, JsonBody, ListParams};
use crate::models::Region;
use crate::schemas::{RegionIn, RegionPatch, REGION_CREATE_RULES, REGION_UPDATE_RULES};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

#[utoipa::path(
    post,
    path = "/api/regions/",
    request_body = RegionIn,
    responses(
        (status = 201, description = "Region created", body = Region),
        (status = 422, description = "Invalid body"),
    ),
    tag = "regions"
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Region>), AppError> {
    let payload = RequestValidator::validate(&body, REGION_CREATE_RULES)?;
    let region = state.regions.create(&payload).await?;
    tracing::info!(region_id = region.region_id, "region created");
    Ok((StatusCode::CREATED, Json(region)))
}

#[utoipa::path(
    get,
    path = "/api/regions/",
    params(
        ("offset" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return"),
    ),
    responses(
        (status = 200, description = "Regions ordered by id", body = [Region]),
        (status = 422, description = "Invalid query parameters"),
    ),
    tag = "regions"
)]
pub async fn list(
    State(state): State<AppState>,
    ListParams(page): ListParams,
) -> Result<Json<Vec<Region>>, AppError> {
    Ok(Json(state.regions.list(page).await?))
}

#[utoipa::path(
    get,
    path = "/api/regions/{id}/",
    params(("id" = i64, Path, description = "Region id, positive")),
    responses(
        (status = 200, description = "Region", body = Region),
        (status = 404, description = "No region with this id"),
        (status = 422, description = "Invalid id"),
    ),
    tag = "regions"
)]
pub async fn read(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Region>, AppError> {
    Ok(Json(state.regions.retrieve(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/regions/{id}/",
    params(("id" = i64, Path, description = "Region id, positive")),
    request_body = RegionPatch,
    responses(
        (status = 200, description = "Region after update", body = Region),
        (status = 404, description = "No region with this id"),
        (status = 422, description = "Invalid id or body"),
    ),
    tag = "regions"
)]
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(body): JsonBody,
) -> Result<Json<Region>, AppError> {
    let payload = RequestValidator::validate_partial(&body, REGION_UPDATE_RULES)?;
    Ok(Json(state.regions.update(id, &payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/regions/{id}/",
    params(("id" = i64, Path, description = "Region id, positive")),
    responses(
        (status = 200, description = "Region as it was before removal", body = Region),
        (status = 404, description = "No region with this id"),
        (status = 422, description = "Invalid id"),
    ),
    tag = "regions"
)]
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Region>, AppError> {
    let region = state.regions.delete(id).await?;
    tracing::info!(region_id = region.region_id, "region deleted");
    Ok(Json(region))
}
