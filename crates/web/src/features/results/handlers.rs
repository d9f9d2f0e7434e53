use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::{CreatedResponse, SuccessResponse},
    dto::result::ResultRequest,
    models::{CompetitionResult, ResultSummary},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results",
    responses(
        (status = 200, description = "List all results successfully", body = Vec<ResultSummary>)
    ),
    tag = "results"
)]
pub async fn list_results(State(db): State<Database>) -> Result<Response, WebError> {
    let results = services::list_results(db.pool()).await?;

    Ok(Json(results).into_response())
}

#[utoipa::path(
    get,
    path = "/api/results/{id}",
    params(
        ("id" = i32, Path, description = "Result id")
    ),
    responses(
        (status = 200, description = "Result found", body = CompetitionResult),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn get_result(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let result = services::get_result(db.pool(), id).await?;

    Ok(Json(result).into_response())
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = ResultRequest,
    responses(
        (status = 201, description = "Result created successfully", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A referenced record does not exist")
    ),
    tag = "results"
)]
pub async fn create_result(
    State(db): State<Database>,
    payload: Result<Json<ResultRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;
    req.validate()?;

    let id = services::create_result(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })).into_response())
}

#[utoipa::path(
    put,
    path = "/api/results/{id}",
    params(
        ("id" = i32, Path, description = "Result id")
    ),
    request_body = ResultRequest,
    responses(
        (status = 200, description = "Result updated successfully", body = SuccessResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A referenced record does not exist")
    ),
    tag = "results"
)]
pub async fn update_result(
    State(db): State<Database>,
    Path(id): Path<i32>,
    payload: Result<Json<ResultRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;
    req.validate()?;

    services::update_result(db.pool(), id, &req).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/results/{id}",
    params(
        ("id" = i32, Path, description = "Result id")
    ),
    responses(
        (status = 200, description = "Result deleted successfully", body = SuccessResponse)
    ),
    tag = "results"
)]
pub async fn delete_result(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    services::delete_result(db.pool(), id).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}
