use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_coach, delete_coach, get_coach, list_coaches, update_coach};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_coaches))
        .route("/", post(create_coach))
        .route("/:id", get(get_coach))
        .route("/:id", put(update_coach))
        .route("/:id", delete(delete_coach))
}
