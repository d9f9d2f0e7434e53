use sqlx::PgPool;
use storage::{error::Result, models::LookupItem, repository::lookup::LookupRepository};

pub async fn list_sport_types(pool: &PgPool) -> Result<Vec<LookupItem>> {
    let repo = LookupRepository::new(pool);
    repo.sport_types().await
}

pub async fn list_competition_types(pool: &PgPool) -> Result<Vec<LookupItem>> {
    let repo = LookupRepository::new(pool);
    repo.competition_types().await
}

pub async fn list_awards(pool: &PgPool) -> Result<Vec<LookupItem>> {
    let repo = LookupRepository::new(pool);
    repo.awards().await
}
