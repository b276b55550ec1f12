//! Backend availability probe: runs once at startup and binds the invoker.
//!
//! The decision is never re-evaluated; a restart is required to pick up a
//! backend that comes online later.

use std::sync::Arc;

use tracing::{info, warn};

use super::observed::ObservedInvoker;
use super::stand_in::StandInInvoker;
use super::{GaiClient, Invoker};
use crate::config::GaiSettings;

/// The startup decision: whether the real backend is usable, and the invoker bound to it.
#[derive(Clone)]
pub struct Backend {
    pub available: bool,
    pub invoker: Arc<dyn Invoker>,
}

impl Backend {
    pub fn stand_in() -> Self {
        Self {
            available: false,
            invoker: Arc::new(StandInInvoker),
        }
    }

    pub fn real(invoker: Arc<dyn Invoker>) -> Self {
        Self {
            available: true,
            invoker,
        }
    }
}

/// Attempts a single handshake with the configured backend. No retries.
pub async fn probe(settings: &GaiSettings) -> Backend {
    match connect(settings).await {
        Ok(client) => {
            info!(
                "LinkedIn GAI Service initialized. GAI Available: true (resource={}, deployment={})",
                settings.resource_id,
                client.deployment_id()
            );
            let invoker: Arc<dyn Invoker> = if settings.observe {
                Arc::new(ObservedInvoker::new(client))
            } else {
                Arc::new(client)
            };
            Backend::real(invoker)
        }
        Err(cause) => {
            warn!("LinkedIn GAI Service initialized. GAI Available: false ({cause})");
            Backend::stand_in()
        }
    }
}

async fn connect(settings: &GaiSettings) -> Result<GaiClient, String> {
    let endpoint = settings
        .endpoint
        .as_deref()
        .ok_or_else(|| "GAI_ENDPOINT is not configured".to_string())?;

    let client = GaiClient::new(endpoint, settings)
        .map_err(|e| format!("could not build GAI client: {e}"))?;

    client
        .handshake()
        .await
        .map_err(|e| format!("handshake with {endpoint} failed: {e}"))?;

    Ok(client)
}
