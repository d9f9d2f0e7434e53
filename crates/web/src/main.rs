use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::coaches::handlers::list_coaches,
        features::coaches::handlers::get_coach,
        features::coaches::handlers::create_coach,
        features::coaches::handlers::update_coach,
        features::coaches::handlers::delete_coach,
        features::competitions::handlers::list_competitions,
        features::competitions::handlers::get_competition,
        features::competitions::handlers::create_competition,
        features::competitions::handlers::update_competition,
        features::competitions::handlers::delete_competition,
        features::results::handlers::list_results,
        features::results::handlers::get_result,
        features::results::handlers::create_result,
        features::results::handlers::update_result,
        features::results::handlers::delete_result,
        features::lookups::handlers::list_sport_types,
        features::lookups::handlers::list_competition_types,
        features::lookups::handlers::list_awards,
        features::reports::handlers::competition_awards,
        features::reports::handlers::female_athletes,
        features::stats::handlers::get_stats,
    ),
    components(
        schemas(
            storage::models::Athlete,
            storage::models::AthleteSummary,
            storage::models::Coach,
            storage::models::Competition,
            storage::models::CompetitionSummary,
            storage::models::CompetitionResult,
            storage::models::ResultSummary,
            storage::models::LookupItem,
            storage::models::CompetitionAward,
            storage::models::FemaleAthlete,
            storage::dto::athlete::AthleteRequest,
            storage::dto::coach::CoachRequest,
            storage::dto::competition::CompetitionRequest,
            storage::dto::result::ResultRequest,
            storage::dto::common::CreatedResponse,
            storage::dto::common::SuccessResponse,
            storage::dto::common::EntityCounts,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete record endpoints"),
        (name = "coaches", description = "Coach record endpoints"),
        (name = "competitions", description = "Competition record endpoints"),
        (name = "results", description = "Result record endpoints"),
        (name = "lookups", description = "Read-only reference data"),
        (name = "reports", description = "Fixed reporting queries"),
        (name = "stats", description = "Dashboard counts"),
    )
)]
struct ApiDoc;

/// Everything mounted under /api.
fn api_routes() -> Router<Database> {
    Router::new()
        .nest("/athletes", features::athletes::routes::routes())
        .nest("/coaches", features::coaches::routes::routes())
        .nest("/competitions", features::competitions::routes::routes())
        .nest("/results", features::results::routes::routes())
        .nest("/reports", features::reports::routes::routes())
        .merge(features::lookups::routes::routes())
        .merge(features::stats::routes::routes())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting sports records API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    // Lazy pool: requests that fail validation never touch a connection,
    // so these run without a database.
    fn test_app() -> Router {
        let db = Database::connect_lazy("postgres://localhost/records_test").unwrap();
        Router::new().nest("/api", api_routes()).with_state(db)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_athlete_missing_fields_rejected_before_storage() {
        let response = test_app()
            .oneshot(post_json(
                "/api/athletes",
                r#"{"name":"A. Lee","type":"Individual"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_coach_empty_name_rejected() {
        let response = test_app()
            .oneshot(post_json("/api/coaches", r#"{"fullName":""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_athlete_unknown_type_rejected() {
        let response = test_app()
            .oneshot(post_json(
                "/api/athletes",
                r#"{"name":"A. Lee","type":"Pair","sportTypeId":1,"coachId":1}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_result_malformed_date_rejected() {
        let response = test_app()
            .oneshot(post_json(
                "/api/results",
                r#"{"competitionId":1,"sportTypeId":6,"athleteId":3,"awardId":2,"eventDate":"March 1st"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_competition_zero_type_rejected() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/competitions/1")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"World Championship","typeId":0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_id_rejected() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/athletes/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_openapi_doc_builds() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/athletes"));
        assert!(doc.paths.paths.contains_key("/api/reports/female-athletes"));
    }
}
