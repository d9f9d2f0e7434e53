use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_competition, delete_competition, get_competition, list_competitions,
    update_competition,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_competitions))
        .route("/", post(create_competition))
        .route("/:id", get(get_competition))
        .route("/:id", put(update_competition))
        .route("/:id", delete(delete_competition))
}
