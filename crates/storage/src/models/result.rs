use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Result list row, joined with the display names of all four references.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ResultSummary {
    pub id: i32,
    pub competition_id: i32,
    pub sport_type_id: i32,
    pub athlete_id: i32,
    pub award_id: i32,
    pub event_date: NaiveDate,
    pub competition_name: String,
    pub sport_type: String,
    pub athlete_name: String,
    pub award_name: String,
}

/// Flat result row with raw foreign keys only, for edit prefill.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CompetitionResult {
    pub id: i32,
    pub competition_id: i32,
    pub sport_type_id: i32,
    pub athlete_id: i32,
    pub award_id: i32,
    pub event_date: NaiveDate,
}
