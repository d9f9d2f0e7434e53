use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row shape shared by the read-only reference tables
/// (sport types, competition types, awards).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LookupItem {
    pub id: i32,
    pub name: String,
}
