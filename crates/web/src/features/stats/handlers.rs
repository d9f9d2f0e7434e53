use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::common::EntityCounts};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Row counts per entity", body = EntityCounts)
    ),
    tag = "stats"
)]
pub async fn get_stats(State(db): State<Database>) -> Result<Response, WebError> {
    let counts = services::counts(db.pool()).await?;

    Ok(Json(counts).into_response())
}
