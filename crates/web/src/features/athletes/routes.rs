use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_athlete, delete_athlete, get_athlete, list_athletes, update_athlete,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_athletes))
        .route("/", post(create_athlete))
        .route("/:id", get(get_athlete))
        .route("/:id", put(update_athlete))
        .route("/:id", delete(delete_athlete))
}
