use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Competition list row with the competition type name joined in.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CompetitionSummary {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub competition_type: String,
}

/// Full competition row, including the raw type foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Competition {
    pub id: i32,
    pub name: String,
    pub type_id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub competition_type: String,
}
