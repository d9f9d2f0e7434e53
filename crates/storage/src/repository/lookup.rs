use sqlx::PgPool;

use crate::error::Result;
use crate::models::LookupItem;

/// Readers for the reference tables. These are populated outside this
/// application; no write path exists for them.
pub struct LookupRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LookupRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn sport_types(&self) -> Result<Vec<LookupItem>> {
        let items = sqlx::query_as::<_, LookupItem>(
            "SELECT id, name FROM sport_types ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    pub async fn competition_types(&self) -> Result<Vec<LookupItem>> {
        let items = sqlx::query_as::<_, LookupItem>(
            "SELECT id, name FROM competition_types ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Awards keep their table order (gold before silver before bronze).
    pub async fn awards(&self) -> Result<Vec<LookupItem>> {
        let items =
            sqlx::query_as::<_, LookupItem>("SELECT id, name FROM awards ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(items)
    }
}
