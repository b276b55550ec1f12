//! LLM Client: the single point of entry for all generative backend calls.
//!
//! ARCHITECTURAL RULE: No other module may talk to the GAI gateway directly.
//! Orchestrators only see the `Invoker` trait; which implementation sits behind
//! it is decided once at startup by `probe::probe`.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::GaiSettings;

pub mod observed;
pub mod probe;
pub mod prompts;
pub mod stand_in;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
const MODELS_PATH: &str = "/models";
const RESOURCE_ID_HEADER: &str = "x-resource-id";
const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Could not decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("LinkedIn GAI returned empty response")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One role-tagged message. An ordered slice of these is a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// The backend invocation trait. Implement this to swap backends without touching
/// the orchestrators or handlers.
///
/// Carried in `Generator` as `Arc<dyn Invoker>`.
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, messages: &[Message]) -> Result<String, BackendError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GatewayError {
    error: GatewayErrorBody,
}

#[derive(Debug, Deserialize)]
struct GatewayErrorBody {
    message: String,
}

/// Client for the LinkedIn GAI gateway (OpenAI-compatible chat completions).
/// One request per call: resilience lives in the normalizer, not in retries.
#[derive(Clone)]
pub struct GaiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    resource_id: String,
    deployment_id: String,
    max_tokens: u32,
    temperature: f32,
}

impl GaiClient {
    pub fn new(endpoint: &str, settings: &GaiSettings) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            resource_id: settings.resource_id.clone(),
            deployment_id: settings.deployment_id.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    pub fn deployment_id(&self) -> &str {
        &self.deployment_id
    }

    /// Lightweight reachability and permission check used by the availability probe.
    pub async fn handshake(&self) -> Result<(), BackendError> {
        let response = self
            .request(self.client.get(self.url(MODELS_PATH)))
            .timeout(HANDSHAKE_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), body));
        }
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.header(RESOURCE_ID_HEADER, &self.resource_id);
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }
}

#[async_trait]
impl Invoker for GaiClient {
    async fn invoke(&self, messages: &[Message]) -> Result<String, BackendError> {
        let body = ChatRequest {
            model: &self.deployment_id,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .request(self.client.post(self.url(CHAT_COMPLETIONS_PATH)))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), text));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)?;
        if let Some(usage) = &parsed.usage {
            debug!(
                "GAI call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }
        extract_content(parsed)
    }
}

/// Prefers the gateway's structured error message over the raw body.
fn api_error(status: u16, body: String) -> BackendError {
    let message = serde_json::from_str::<GatewayError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    BackendError::Api { status, message }
}

/// Takes the first choice's text. Missing, null or whitespace-only text is an error,
/// never a valid empty answer.
fn extract_content(response: ChatResponse) -> Result<String, BackendError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(BackendError::EmptyContent)?;

    if content.trim().is_empty() {
        return Err(BackendError::EmptyContent);
    }
    Ok(content)
}
