use sqlx::PgPool;
use storage::{
    dto::athlete::AthleteRequest,
    error::Result,
    models::{Athlete, AthleteSummary},
    repository::athlete::AthleteRepository,
};

/// List all athletes with their sport type and coach names
pub async fn list_athletes(pool: &PgPool) -> Result<Vec<AthleteSummary>> {
    let repo = AthleteRepository::new(pool);
    repo.list().await
}

/// Get athlete by id, including raw foreign keys for edit prefill
pub async fn get_athlete(pool: &PgPool, id: i32) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new athlete, returning its assigned id
pub async fn create_athlete(pool: &PgPool, request: &AthleteRequest) -> Result<i32> {
    let repo = AthleteRepository::new(pool);
    repo.create(request).await
}

/// Replace an athlete's fields
pub async fn update_athlete(pool: &PgPool, id: i32, request: &AthleteRequest) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.update(id, request).await
}

/// Delete an athlete
pub async fn delete_athlete(pool: &PgPool, id: i32) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.delete(id).await
}
