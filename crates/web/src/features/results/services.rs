use sqlx::PgPool;
use storage::{
    dto::result::ResultRequest,
    error::Result,
    models::{CompetitionResult, ResultSummary},
    repository::result::ResultRepository,
};

/// List all results with joined display names, newest first
pub async fn list_results(pool: &PgPool) -> Result<Vec<ResultSummary>> {
    let repo = ResultRepository::new(pool);
    repo.list().await
}

/// Get result by id, raw foreign keys only
pub async fn get_result(pool: &PgPool, id: i32) -> Result<CompetitionResult> {
    let repo = ResultRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new result, returning its assigned id
pub async fn create_result(pool: &PgPool, request: &ResultRequest) -> Result<i32> {
    let repo = ResultRepository::new(pool);
    repo.create(request).await
}

/// Replace a result's fields
pub async fn update_result(pool: &PgPool, id: i32, request: &ResultRequest) -> Result<()> {
    let repo = ResultRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a result
pub async fn delete_result(pool: &PgPool, id: i32) -> Result<()> {
    let repo = ResultRepository::new(pool);
    repo.delete(id).await
}
