use sqlx::PgPool;
use storage::{
    error::Result,
    models::{CompetitionAward, FemaleAthlete},
    repository::report::ReportRepository,
};

/// Awards handed out at one competition in one sport
pub async fn awards_by_competition_and_sport(
    pool: &PgPool,
    competition_id: i32,
    sport_type_id: i32,
) -> Result<Vec<CompetitionAward>> {
    let repo = ReportRepository::new(pool);
    repo.awards_by_competition_and_sport(competition_id, sport_type_id)
        .await
}

/// Female athletes aged 18 to 20 in the target year
pub async fn female_athletes_18_to_20(pool: &PgPool, year: i32) -> Result<Vec<FemaleAthlete>> {
    let repo = ReportRepository::new(pool);
    repo.female_athletes_18_to_20(year).await
}
