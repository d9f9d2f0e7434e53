use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{list_awards, list_competition_types, list_sport_types};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/sport-types", get(list_sport_types))
        .route("/competition-types", get(list_competition_types))
        .route("/awards", get(list_awards))
}
