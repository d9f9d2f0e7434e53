use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_stats;

pub fn routes() -> Router<Database> {
    Router::new().route("/stats", get(get_stats))
}
