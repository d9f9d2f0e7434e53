use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, models::LookupItem};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/sport-types",
    responses(
        (status = 200, description = "List all sport types", body = Vec<LookupItem>)
    ),
    tag = "lookups"
)]
pub async fn list_sport_types(State(db): State<Database>) -> Result<Response, WebError> {
    let items = services::list_sport_types(db.pool()).await?;

    Ok(Json(items).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competition-types",
    responses(
        (status = 200, description = "List all competition types", body = Vec<LookupItem>)
    ),
    tag = "lookups"
)]
pub async fn list_competition_types(State(db): State<Database>) -> Result<Response, WebError> {
    let items = services::list_competition_types(db.pool()).await?;

    Ok(Json(items).into_response())
}

#[utoipa::path(
    get,
    path = "/api/awards",
    responses(
        (status = 200, description = "List all awards", body = Vec<LookupItem>)
    ),
    tag = "lookups"
)]
pub async fn list_awards(State(db): State<Database>) -> Result<Response, WebError> {
    let items = services::list_awards(db.pool()).await?;

    Ok(Json(items).into_response())
}
