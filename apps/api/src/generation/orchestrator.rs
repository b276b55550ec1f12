//! Task orchestration: one entry point per task kind.
//!
//! Flow: availability check → prompt_builder → Invoker::invoke → normalizer.
//!
//! Every path ends in a fully populated value. Backend absence and backend
//! failure are reported through `Outcome::Degraded`, never as `Err`.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::generation::fallback;
use crate::generation::models::{
    GenerationRequest, JobMatchAnalysis, JobMatchRequest, PostRequest, PostResult, Resume,
    ResumeRequest, StructuredResult, TaskKind,
};
use crate::generation::normalizer;
use crate::generation::outcome::{Degradation, Outcome};
use crate::generation::prompt_builder;
use crate::llm_client::probe::Backend;
use crate::llm_client::{Invoker, Message};

/// Runs generation tasks against the backend chosen at startup.
/// Immutable after construction; share it as `Arc<Generator>`.
pub struct Generator {
    available: bool,
    invoker: Arc<dyn Invoker>,
}

impl Generator {
    pub fn new(backend: Backend) -> Self {
        Self {
            available: backend.available,
            invoker: backend.invoker,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn service_type(&self) -> &'static str {
        if self.available {
            "Real LinkedIn GAI"
        } else {
            "Mock Implementation"
        }
    }

    pub async fn generate_resume(&self, request: &ResumeRequest) -> Outcome<Resume> {
        info!(
            "Starting resume generation for URL: {} (target role: {:?}, profile provided: {})",
            request.linkedin_url,
            request.target_role(),
            request.user_profile.is_some()
        );
        self.run(
            TaskKind::Resume,
            || prompt_builder::resume_messages(request),
            |raw| normalizer::normalize_resume(raw, request),
            |reason| fallback::resume(request, reason),
        )
        .await
    }

    pub async fn analyze_job_match(&self, request: &JobMatchRequest) -> Outcome<JobMatchAnalysis> {
        info!(
            "Starting job compatibility analysis for {} skills",
            request.user_skills.len()
        );
        self.run(
            TaskKind::JobMatch,
            || prompt_builder::job_match_messages(request),
            |raw| normalizer::normalize_job_match(raw, request),
            |reason| fallback::job_match(request, reason),
        )
        .await
    }

    pub async fn generate_post(&self, request: &PostRequest) -> Outcome<PostResult> {
        info!("Starting LinkedIn post generation for topic: {}", request.topic);
        self.run(
            TaskKind::Post,
            || prompt_builder::post_messages(request),
            |raw| normalizer::normalize_post(raw, request),
            |reason| fallback::post(request, reason),
        )
        .await
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Outcome<StructuredResult> {
        match request {
            GenerationRequest::Resume(r) => {
                self.generate_resume(r).await.map(StructuredResult::Resume)
            }
            GenerationRequest::JobMatch(r) => {
                self.analyze_job_match(r).await.map(StructuredResult::JobMatch)
            }
            GenerationRequest::Post(r) => self.generate_post(r).await.map(StructuredResult::Post),
        }
    }

    /// Shared sequence for every task. The prompt is only built when the backend
    /// is available, and the backend is called exactly once.
    async fn run<T>(
        &self,
        task: TaskKind,
        build_messages: impl FnOnce() -> Vec<Message>,
        normalize: impl FnOnce(&str) -> Outcome<T>,
        fallback: impl FnOnce(&Degradation) -> T,
    ) -> Outcome<T> {
        if !self.available {
            warn!("LinkedIn GAI is not available; returning offline {task} fallback");
            return degraded(Degradation::BackendUnavailable, fallback);
        }

        let messages = build_messages();
        match self.invoker.invoke(&messages).await {
            Ok(raw) => {
                info!("Received GAI {task} response, length: {}", raw.len());
                normalize(&raw)
            }
            Err(e) => {
                error!("LinkedIn GAI {task} invocation failed: {e}");
                degraded(Degradation::BackendError(e.to_string()), fallback)
            }
        }
    }
}

fn degraded<T>(reason: Degradation, fallback: impl FnOnce(&Degradation) -> T) -> Outcome<T> {
    let value = fallback(&reason);
    Outcome::Degraded(value, reason)
}
