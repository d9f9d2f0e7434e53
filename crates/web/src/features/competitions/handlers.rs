use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::{CreatedResponse, SuccessResponse},
    dto::competition::CompetitionRequest,
    models::{Competition, CompetitionSummary},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions",
    responses(
        (status = 200, description = "List all competitions successfully", body = Vec<CompetitionSummary>)
    ),
    tag = "competitions"
)]
pub async fn list_competitions(State(db): State<Database>) -> Result<Response, WebError> {
    let competitions = services::list_competitions(db.pool()).await?;

    Ok(Json(competitions).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}",
    params(
        ("id" = i32, Path, description = "Competition id")
    ),
    responses(
        (status = 200, description = "Competition found", body = Competition),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn get_competition(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let competition = services::get_competition(db.pool(), id).await?;

    Ok(Json(competition).into_response())
}

#[utoipa::path(
    post,
    path = "/api/competitions",
    request_body = CompetitionRequest,
    responses(
        (status = 201, description = "Competition created successfully", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Referenced competition type does not exist")
    ),
    tag = "competitions"
)]
pub async fn create_competition(
    State(db): State<Database>,
    payload: Result<Json<CompetitionRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;
    req.validate()?;

    let id = services::create_competition(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })).into_response())
}

#[utoipa::path(
    put,
    path = "/api/competitions/{id}",
    params(
        ("id" = i32, Path, description = "Competition id")
    ),
    request_body = CompetitionRequest,
    responses(
        (status = 200, description = "Competition updated successfully", body = SuccessResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Referenced competition type does not exist")
    ),
    tag = "competitions"
)]
pub async fn update_competition(
    State(db): State<Database>,
    Path(id): Path<i32>,
    payload: Result<Json<CompetitionRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;
    req.validate()?;

    services::update_competition(db.pool(), id, &req).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/competitions/{id}",
    params(
        ("id" = i32, Path, description = "Competition id")
    ),
    responses(
        (status = 200, description = "Competition deleted successfully", body = SuccessResponse),
        (status = 409, description = "Competition is still referenced by a result")
    ),
    tag = "competitions"
)]
pub async fn delete_competition(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    services::delete_competition(db.pool(), id).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}
