use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::athlete::AthleteRequest,
    dto::common::{CreatedResponse, SuccessResponse},
    models::{Athlete, AthleteSummary},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/athletes",
    responses(
        (status = 200, description = "List all athletes successfully", body = Vec<AthleteSummary>)
    ),
    tag = "athletes"
)]
pub async fn list_athletes(State(db): State<Database>) -> Result<Response, WebError> {
    let athletes = services::list_athletes(db.pool()).await?;

    Ok(Json(athletes).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{id}",
    params(
        ("id" = i32, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = Athlete),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete(db.pool(), id).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes",
    request_body = AthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Referenced sport type or coach does not exist")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    payload: Result<Json<AthleteRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;
    req.validate()?;

    let id = services::create_athlete(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })).into_response())
}

#[utoipa::path(
    put,
    path = "/api/athletes/{id}",
    params(
        ("id" = i32, Path, description = "Athlete id")
    ),
    request_body = AthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = SuccessResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Referenced sport type or coach does not exist")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(id): Path<i32>,
    payload: Result<Json<AthleteRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;
    req.validate()?;

    services::update_athlete(db.pool(), id, &req).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/athletes/{id}",
    params(
        ("id" = i32, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete deleted successfully", body = SuccessResponse),
        (status = 409, description = "Athlete is still referenced by a result")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    services::delete_athlete(db.pool(), id).await?;

    Ok(Json(SuccessResponse::ok()).into_response())
}
