pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/parse/resume", post(handlers::handle_parse_resume))
        .route(
            "/parse/job-description",
            post(handlers::handle_parse_job_description),
        )
        // No request-size limit: resume uploads routinely exceed axum's 2 MB default.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
