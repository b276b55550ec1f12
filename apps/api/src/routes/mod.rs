pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

/// Generation endpoints advertised by `/service/status`.
pub const GENERATION_ENDPOINTS: [&str; 3] =
    ["/generate-resume", "/analyze-job-match", "/generate-post"];

fn generation_routes() -> Router<AppState> {
    Router::new()
        .route("/generate-resume", post(handlers::handle_generate_resume))
        .route("/analyze-job-match", post(handlers::handle_analyze_job_match))
        .route("/generate-post", post(handlers::handle_generate_post))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/service/status", get(health::service_status_handler))
        .merge(generation_routes())
        // Paths used by the web frontend's proxy
        .route("/api/service/status", get(health::service_status_handler))
        .nest("/api/linkedin", generation_routes())
        .with_state(state)
}
