use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::coach::CoachRequest,
    dto::common::{CreatedResponse, SuccessResponse},
    models::Coach,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/coaches",
    responses(
        (status = 200, description = "List all coaches successfully", body = Vec<Coach>)
    ),
    tag = "coaches"
)]
pub async fn list_coaches(State(db): State<Database>) -> Result<Response, WebError> {
    let coaches = services::list_coaches(db.pool()).await?;

    Ok(Json(coaches).into_response())
}

#[utoipa::path(
    get,
    path = "/api/coaches/{id}",
    params(
        ("id" = i32, Path, description = "Coach id")
    ),
    responses(
        (status = 200, description = "Coach found", body = Coach),
        (status = 404, description = "Coach not found")
    ),
    tag = "coaches"
)]
pub async fn get_coach(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let coach = services::get_coach(db.pool(), id).await?;

    Ok(Json(coach).into_response())
}

#[utoipa::path(
    post,
    path = "/api/coaches",
    request_body = CoachRequest,
    responses(
        (status = 201, description = "Coach created successfully", body = CreatedResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "coaches"
)]
pub async fn create_coach(
    State(db): State<Database>,
    payload: Result<Json<CoachRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;
    req.validate()?;

    let id = services::create_coach(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })).into_response())
}

#[utoipa::path(
    put,
    path = "/api/coaches/{id}",
    params(
        ("id" = i32, Path, description = "Coach id")
    ),
    request_body = CoachRequest,
    responses(
        (status = 200, description = "Coach updated successfully", body = SuccessResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "coaches"
)]
pub async fn update_coach(
    State(db): State<Database>,
    Path(id): Path<i32>,
    payload: Result<Json<CoachRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;
    req.validate()?;

    services::update_coach(db.pool(), id, &req).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/coaches/{id}",
    params(
        ("id" = i32, Path, description = "Coach id")
    ),
    responses(
        (status = 200, description = "Coach deleted successfully", body = SuccessResponse),
        (status = 409, description = "Coach is still referenced by an athlete")
    ),
    tag = "coaches"
)]
pub async fn delete_coach(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    services::delete_coach(db.pool(), id).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}
