use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{competition_awards, female_athletes};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/competition-awards", get(competition_awards))
        .route("/female-athletes", get(female_athletes))
}
