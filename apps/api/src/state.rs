use std::sync::Arc;

use crate::generation::orchestrator::Generator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Bound once at startup from the availability probe; read-only afterwards.
    pub generator: Arc<Generator>,
}
