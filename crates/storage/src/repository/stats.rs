use sqlx::PgPool;

use crate::dto::common::EntityCounts;
use crate::error::Result;

/// Row counts for the dashboard.
pub struct StatsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StatsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn counts(&self) -> Result<EntityCounts> {
        let athletes = self.count("SELECT COUNT(*) FROM athletes").await?;
        let coaches = self.count("SELECT COUNT(*) FROM coaches").await?;
        let competitions = self.count("SELECT COUNT(*) FROM competitions").await?;
        let awards = self.count("SELECT COUNT(*) FROM results").await?;

        Ok(EntityCounts {
            athletes,
            coaches,
            competitions,
            awards,
        })
    }

    async fn count(&self, sql: &str) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(sql).fetch_one(self.pool).await?;
        Ok(count)
    }
}
