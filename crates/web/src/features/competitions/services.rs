use sqlx::PgPool;
use storage::{
    dto::competition::CompetitionRequest,
    error::Result,
    models::{Competition, CompetitionSummary},
    repository::competition::CompetitionRepository,
};

/// List all competitions with their type names
pub async fn list_competitions(pool: &PgPool) -> Result<Vec<CompetitionSummary>> {
    let repo = CompetitionRepository::new(pool);
    repo.list().await
}

/// Get competition by id, including the raw type foreign key
pub async fn get_competition(pool: &PgPool, id: i32) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new competition, returning its assigned id
pub async fn create_competition(pool: &PgPool, request: &CompetitionRequest) -> Result<i32> {
    let repo = CompetitionRepository::new(pool);
    repo.create(request).await
}

/// Replace a competition's fields
pub async fn update_competition(
    pool: &PgPool,
    id: i32,
    request: &CompetitionRequest,
) -> Result<()> {
    let repo = CompetitionRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a competition; fails while any result still references it
pub async fn delete_competition(pool: &PgPool, id: i32) -> Result<()> {
    let repo = CompetitionRepository::new(pool);
    repo.delete(id).await
}
