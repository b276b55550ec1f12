// Generation core: prompt building, invocation, normalization and fallbacks.
// All backend calls go through llm_client::Invoker; nothing here talks HTTP to the gateway.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod orchestrator;
pub mod outcome;
pub mod prompt_builder;
pub mod prompts;
