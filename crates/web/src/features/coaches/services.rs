use sqlx::PgPool;
use storage::{
    dto::coach::CoachRequest, error::Result, models::Coach,
    repository::coach::CoachRepository,
};

/// List all coaches
pub async fn list_coaches(pool: &PgPool) -> Result<Vec<Coach>> {
    let repo = CoachRepository::new(pool);
    repo.list().await
}

/// Get coach by id
pub async fn get_coach(pool: &PgPool, id: i32) -> Result<Coach> {
    let repo = CoachRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new coach, returning its assigned id
pub async fn create_coach(pool: &PgPool, request: &CoachRequest) -> Result<i32> {
    let repo = CoachRepository::new(pool);
    repo.create(request).await
}

/// Replace a coach's fields
pub async fn update_coach(pool: &PgPool, id: i32, request: &CoachRequest) -> Result<()> {
    let repo = CoachRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a coach; fails while any athlete still references it
pub async fn delete_coach(pool: &PgPool, id: i32) -> Result<()> {
    let repo = CoachRepository::new(pool);
    repo.delete(id).await
}
