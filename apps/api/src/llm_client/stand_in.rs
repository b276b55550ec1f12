use async_trait::async_trait;

use super::{BackendError, Invoker, Message};

pub const STAND_IN_RESPONSE: &str =
    "Mock GAI response - LinkedIn GAI not available in development environment";

/// Offline substitute bound when the probe finds no usable backend.
/// Answers immediately with a fixed placeholder; no network involved.
pub struct StandInInvoker;

#[async_trait]
impl Invoker for StandInInvoker {
    async fn invoke(&self, _messages: &[Message]) -> Result<String, BackendError> {
        Ok(STAND_IN_RESPONSE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stand_in_returns_placeholder_for_any_input() {
        let invoker = StandInInvoker;
        let empty = invoker.invoke(&[]).await.unwrap();
        let with_prompt = invoker.invoke(&[Message::user("write a post")]).await.unwrap();
        assert_eq!(empty, STAND_IN_RESPONSE);
        assert_eq!(with_prompt, STAND_IN_RESPONSE);
    }
}
