use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::report::{AwardsReportParams, FemaleAthletesParams},
    models::{CompetitionAward, FemaleAthlete},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/reports/competition-awards",
    params(AwardsReportParams),
    responses(
        (status = 200, description = "Awards for one competition and sport", body = Vec<CompetitionAward>)
    ),
    tag = "reports"
)]
pub async fn competition_awards(
    State(db): State<Database>,
    Query(params): Query<AwardsReportParams>,
) -> Result<Response, WebError> {
    let rows =
        services::awards_by_competition_and_sport(db.pool(), params.competition, params.sport)
            .await?;

    Ok(Json(rows).into_response())
}

#[utoipa::path(
    get,
    path = "/api/reports/female-athletes",
    params(FemaleAthletesParams),
    responses(
        (status = 200, description = "Female athletes aged 18 to 20 in the target year", body = Vec<FemaleAthlete>)
    ),
    tag = "reports"
)]
pub async fn female_athletes(
    State(db): State<Database>,
    Query(params): Query<FemaleAthletesParams>,
) -> Result<Response, WebError> {
    let rows = services::female_athletes_18_to_20(db.pool(), params.year).await?;

    Ok(Json(rows).into_response())
}
