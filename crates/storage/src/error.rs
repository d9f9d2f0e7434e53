use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Failed to encode query argument: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
