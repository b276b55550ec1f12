//! Axum route handlers for the generation API.
//!
//! Handlers validate the body, hand plain data to the `Generator`, and render
//! whatever it returns. A degraded outcome is still a successful response.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::models::{
    JobMatchAnalysis, JobMatchRequest, PostRequest, Resume, ResumeRequest,
};
use crate::generation::outcome::Outcome;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub success: bool,
    pub resume_content: Option<Resume>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobMatchResponse {
    pub success: bool,
    pub match_analysis: Option<JobMatchAnalysis>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub success: bool,
    pub post_content: Option<String>,
    pub error: Option<String>,
}

fn log_outcome<T>(task: &str, outcome: &Outcome<T>) {
    match outcome.degradation() {
        None => info!("{task} completed from backend output"),
        Some(reason) => info!("{task} completed with fallback content ({reason})"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate-resume
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumeRequest>, JsonRejection>,
) -> Result<Json<ResumeResponse>, AppError> {
    let Json(request) = payload?;
    if request.linkedin_url.trim().is_empty() {
        return Err(AppError::Validation(
            "linkedin_url cannot be empty".to_string(),
        ));
    }

    let outcome = state.generator.generate_resume(&request).await;
    log_outcome("Resume generation", &outcome);

    Ok(Json(ResumeResponse {
        success: true,
        resume_content: Some(outcome.into_inner()),
        error: None,
    }))
}

/// POST /analyze-job-match
pub async fn handle_analyze_job_match(
    State(state): State<AppState>,
    payload: Result<Json<JobMatchRequest>, JsonRejection>,
) -> Result<Json<JobMatchResponse>, AppError> {
    let Json(request) = payload?;

    let outcome = state.generator.analyze_job_match(&request).await;
    log_outcome("Job match analysis", &outcome);

    Ok(Json(JobMatchResponse {
        success: true,
        match_analysis: Some(outcome.into_inner()),
        error: None,
    }))
}

/// POST /generate-post
pub async fn handle_generate_post(
    State(state): State<AppState>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<Json<PostResponse>, AppError> {
    let Json(request) = payload?;
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let outcome = state.generator.generate_post(&request).await;
    log_outcome("Post generation", &outcome);
    let result = outcome.into_inner();

    Ok(Json(PostResponse {
        success: result.success,
        post_content: Some(result.post),
        error: result.error,
    }))
}
