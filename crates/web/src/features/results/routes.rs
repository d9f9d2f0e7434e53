use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_result, delete_result, get_result, list_results, update_result};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_results))
        .route("/", post(create_result))
        .route("/:id", get(get_result))
        .route("/:id", put(update_result))
        .route("/:id", delete(delete_result))
}
