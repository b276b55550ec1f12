//! Observability decorator for any `Invoker`.
//!
//! Records one structured event per call (call id, message count, prompt size,
//! latency, response size or error) and hands the inner result back untouched.

use std::time::Instant;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use super::{BackendError, Invoker, Message};

pub struct ObservedInvoker<I> {
    inner: I,
}

impl<I: Invoker> ObservedInvoker<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<I: Invoker> Invoker for ObservedInvoker<I> {
    async fn invoke(&self, messages: &[Message]) -> Result<String, BackendError> {
        let call_id = Uuid::new_v4();
        let prompt_chars: usize = messages.iter().map(|m| m.content.chars().count()).sum();
        let started = Instant::now();

        let result = self.inner.invoke(messages).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(text) => info!(
                %call_id,
                messages = messages.len(),
                prompt_chars,
                response_chars = text.chars().count(),
                elapsed_ms,
                "GAI call completed"
            ),
            Err(e) => warn!(
                %call_id,
                messages = messages.len(),
                prompt_chars,
                elapsed_ms,
                error = %e,
                "GAI call failed"
            ),
        }

        result
    }
}
