use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::routes::GENERATION_ENDPOINTS;
use crate::state::AppState;

/// GET /health
/// Returns a status object with backend availability and service version.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "gai_available": state.generator.is_available(),
        "service": "Career Companion LinkedIn GAI API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /service/status
pub async fn service_status_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "linkedin_gai_available": state.generator.is_available(),
        "service_type": state.generator.service_type(),
        "endpoints": GENERATION_ENDPOINTS
    }))
}
