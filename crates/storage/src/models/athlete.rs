use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Athlete list row, joined with the display names of its references.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AthleteSummary {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub athlete_type: String,
    pub sport_type: String,
    pub coach_name: String,
}

/// Full athlete row, including raw foreign keys so edit forms can
/// pre-select the referenced sport type and coach.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub athlete_type: String,
    pub sport_type_id: i32,
    pub coach_id: i32,
    pub sport_type: String,
    pub coach_name: String,
}
