use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the awards-by-competition-and-sport report.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CompetitionAward {
    pub competition_name: String,
    pub sport_type: String,
    pub athlete_name: String,
    pub award_name: String,
    pub event_date: NaiveDate,
    pub coach_name: String,
}

/// Row returned by the external female-athletes report procedure.
/// Birth year and age are computed inside the database; this schema
/// does not carry the underlying columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FemaleAthlete {
    pub athlete_id: i32,
    pub athlete_name: String,
    pub birth_year: i32,
    pub age: i32,
    pub sport_type: String,
    pub coach_name: String,
}
