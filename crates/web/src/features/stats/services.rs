use sqlx::PgPool;
use storage::{dto::common::EntityCounts, error::Result, repository::stats::StatsRepository};

/// Row counts for the dashboard
pub async fn counts(pool: &PgPool) -> Result<EntityCounts> {
    let repo = StatsRepository::new(pool);
    repo.counts().await
}
